//! Calculatrice de saisie : ligne d’expression éditée touche par touche.
//!
//! - `noyau` : éditeur (texte -> texte) + évaluation (texte -> texte ou "Error")
//! - `app`   : état de l’appelant (expression + "vient d’évaluer") et vue egui

pub mod app;
pub mod noyau;

pub use app::{AppCalc, Mode, Touche};
pub use noyau::{
    append_digit_or_dot, append_operator, apply_percent, backspace, evaluate, evaluate_to_string,
    prepare_for_eval, toggle_sign, ErreurCalcul,
};
