//! Noyau — évaluation (pipeline réel)
//!
//! affichage -> symboles de calcul -> jetons -> RPN -> f64 -> texte
//!
//! Tout échec (division quasi nulle, RPN bancale, résultat non fini) se replie
//! sur la sentinelle "Error" côté affichage ; `evaluate` garde l’erreur typée.

use super::erreur::ErreurCalcul;
use super::format::{format_number, ERREUR};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};
use super::symboles::vers_calcul;

/// Étapes intermédiaires, pour le panneau "Démarche".
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Évalue une expression (glyphes d’affichage acceptés) en f64 fini.
pub fn evaluate(expr: &str) -> Result<f64, ErreurCalcul> {
    eval_avec_demarche(expr).map(|(v, _d)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche.
pub fn eval_avec_demarche(expr: &str) -> Result<(f64, Demarche), ErreurCalcul> {
    // 1) Normalisation
    let normalisee = vers_calcul(expr);

    // 2) Jetons
    let jetons = tokenize(&normalisee);

    // 3) RPN
    let rpn = to_rpn(&jetons);

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        normalisee,
    };

    // 4) Valeur
    let v = eval_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }

    Ok((v, d))
}

/// API publique : texte -> texte, jamais d’erreur remontée.
pub fn evaluate_to_string(expr: &str) -> String {
    match evaluate(expr) {
        Ok(v) => format_number(v),
        Err(e) => {
            tracing::debug!(expression = %expr, erreur = %e, "évaluation échouée");
            ERREUR.to_string()
        }
    }
}
