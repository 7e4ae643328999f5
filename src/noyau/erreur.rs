// src/noyau/erreur.rs
//
// Taxonomie des échecs d’évaluation.
// Côté affichage, tout se replie sur une seule sentinelle ("Error") : voir eval.rs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    /// |dénominateur| < EPSILON_DIVISION
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande manquante pour '{op}'")]
    OperandesManquantes { op: char },

    /// La pile finale doit contenir exactement une valeur.
    #[error("expression invalide (pile finale: {profondeur})")]
    PileInvalide { profondeur: usize },

    #[error("résultat non fini")]
    NonFini,
}
