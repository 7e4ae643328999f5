//! Noyau de saisie / évaluation
//!
//! Organisation interne :
//! - symboles.rs : glyphes d’affichage (− × ÷) vs calcul (- * /), marqueur négatif
//! - edition.rs  : éditeur (chiffre, opérateur, ⌫, ±, %, nettoyage avant "=")
//! - jetons.rs   : tokenisation permissive
//! - rpn.rs      : shunting-yard + évaluation à pile
//! - format.rs   : f64 -> texte (10 décimales élaguées, "Error")
//! - erreur.rs   : échecs d’évaluation typés
//! - eval.rs     : pipeline complet

pub mod edition;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use edition::{
    append_digit_or_dot, append_operator, apply_percent, backspace, last_number_bounds,
    prepare_for_eval, toggle_sign,
};
pub use erreur::ErreurCalcul;
pub use eval::{eval_avec_demarche, evaluate, evaluate_to_string, Demarche};
pub use format::{format_number, ERREUR};
