// src/noyau/symboles.rs
//
// Glyphes d’affichage (ce que l’utilisateur voit) vs symboles de calcul (ce que le lexer lit).
//
// Affichage : +  −  ×  ÷   (− = U+2212, moins BINAIRE)
// Calcul    : +  -  *  /
// Marqueur  : -            (moins UNAIRE, seulement en tête d’un nombre)

pub const PLUS: char = '+';
pub const MOINS: char = '−';
pub const FOIS: char = '×';
pub const DIVISE: char = '÷';

/// Signe d’un nombre négatif (jamais un opérateur binaire à l’affichage).
pub const MARQUEUR_NEGATIF: char = '-';

/// Opérateur binaire affiché ?
pub fn est_operateur(c: char) -> bool {
    matches!(c, PLUS | MOINS | FOIS | DIVISE)
}

/// Glyphe d’affichage pour une touche opérateur.
/// Accepte aussi les alias ASCII (clavier) : `-`, `*`, `/`.
pub fn operateur_affiche(c: char) -> Option<char> {
    match c {
        PLUS => Some(PLUS),
        MOINS | '-' => Some(MOINS),
        FOIS | '*' => Some(FOIS),
        DIVISE | '/' => Some(DIVISE),
        _ => None,
    }
}

/// Affichage -> symboles de calcul. Le marqueur `-` reste tel quel.
pub fn vers_calcul(expr: &str) -> String {
    expr.chars()
        .map(|c| match c {
            FOIS => '*',
            DIVISE => '/',
            MOINS => '-',
            autre => autre,
        })
        .collect()
}
