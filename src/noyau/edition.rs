// src/noyau/edition.rs
//
// Éditeur de la ligne de saisie : (expression, action) -> nouvelle expression.
//
// Contrats :
// - fonctions totales : une édition refusée renvoie l’expression telle quelle
// - aucune mutation : chaque action produit une nouvelle String
// - indices en CARACTÈRES (− × ÷ ne tiennent pas sur un octet)
//
// Encodage du signe :
// - `-` (ASCII) = marqueur négatif, seulement en tête d’un nombre
// - `−` (U+2212) = moins binaire ; "a−b" se lit aussi "a + (−b)"

use super::format::format_number;
use super::symboles::{
    est_operateur, operateur_affiche, DIVISE, FOIS, MARQUEUR_NEGATIF, MOINS, PLUS,
};

const ZERO: &str = "0";

fn texte(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Bornes `[debut, fin)` du dernier nombre (indices de caractères).
///
/// - remonte depuis la fin sur chiffres / point
/// - absorbe un marqueur `-` s’il est en position 0 ou précédé d’un opérateur
/// - expression finissant par un opérateur => plage vide en fin de chaîne
pub fn last_number_bounds(expr: &str) -> (usize, usize) {
    let chars: Vec<char> = expr.chars().collect();
    bornes(&chars)
}

fn bornes(chars: &[char]) -> (usize, usize) {
    let fin = chars.len();
    if fin == 0 {
        return (0, 0);
    }
    if est_operateur(chars[fin - 1]) {
        return (fin, fin);
    }

    let mut i = fin;
    while i > 0 && (chars[i - 1].is_ascii_digit() || chars[i - 1] == '.') {
        i -= 1;
    }
    if i > 0 && chars[i - 1] == MARQUEUR_NEGATIF && (i == 1 || est_operateur(chars[i - 2])) {
        i -= 1;
    }
    (i, fin)
}

/// Dernier nombre réduit au seul marqueur ("-", "5×-") : traité comme un point final.
fn marqueur_pendant(chars: &[char]) -> bool {
    let (debut, fin) = bornes(chars);
    fin - debut == 1 && chars[debut] == MARQUEUR_NEGATIF
}

fn finit_par_operateur(chars: &[char]) -> bool {
    chars.last().is_some_and(|&c| est_operateur(c))
}

/// Chiffre ou point en fin d’expression.
pub fn append_digit_or_dot(expr: &str, ch: char) -> String {
    if !(ch.is_ascii_digit() || ch == '.') {
        return expr.to_string();
    }

    // le zéro initial est remplacé, pas prolongé
    match expr {
        "0" => {
            return if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            }
        }
        "-0" => {
            return if ch == '.' {
                "-0.".to_string()
            } else {
                format!("-{ch}")
            }
        }
        _ => {}
    }

    if ch == '.' {
        let chars: Vec<char> = expr.chars().collect();
        let (debut, fin) = bornes(&chars);
        if chars[debut..fin].contains(&'.') {
            return expr.to_string();
        }
        // un point après un opérateur ouvre "0."
        if finit_par_operateur(&chars) || marqueur_pendant(&chars) {
            return format!("{expr}0.");
        }
    }

    format!("{expr}{ch}")
}

/// Opérateur en fin d’expression ; un opérateur en attente est REMPLACÉ.
pub fn append_operator(expr: &str, op: char) -> String {
    let Some(op) = operateur_affiche(op) else {
        return expr.to_string();
    };

    let mut chars: Vec<char> = expr.chars().collect();
    if chars.last() == Some(&'.') {
        chars.pop();
    }
    if marqueur_pendant(&chars) {
        chars.pop();
    }
    if finit_par_operateur(&chars) {
        chars.pop();
    }
    // jamais d’opérateur en tête ("", "-", "." -> "0")
    if chars.is_empty() {
        chars.push('0');
    }

    chars.push(op);
    texte(&chars)
}

/// Retire le dernier caractère ; "0" quand il n’en reste qu’un.
/// "-5" donne "-" : le signe choisi survit au retour arrière.
pub fn backspace(expr: &str) -> String {
    let mut chars: Vec<char> = expr.chars().collect();
    if chars.len() <= 1 {
        return ZERO.to_string();
    }
    chars.pop();
    texte(&chars)
}

/// ± sur le dernier nombre seulement.
///
/// - nombre en tête : ajoute / retire le marqueur `-`
/// - nombre déjà marqué : retire le marqueur
/// - précédé de `+` / `−` : échange `+` <-> `−`
/// - précédé de `×` / `÷` : insère le marqueur après l’opérateur
///
/// Après un opérateur, un nombre encore vide suit les mêmes règles ("5×" -> "5×-").
/// Le marqueur seul ("-") redevient "0".
/// Involution sur toute expression produite par l’éditeur, sauf "-".
pub fn toggle_sign(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    if chars.is_empty() {
        return expr.to_string();
    }
    let (debut, fin) = bornes(&chars);

    let mut out = chars.clone();

    if debut < fin && chars[debut] == MARQUEUR_NEGATIF {
        out.remove(debut);
        if out.is_empty() {
            return ZERO.to_string();
        }
        return texte(&out);
    }
    if debut == 0 {
        out.insert(0, MARQUEUR_NEGATIF);
        return texte(&out);
    }

    match chars[debut - 1] {
        PLUS => out[debut - 1] = MOINS,
        MOINS => out[debut - 1] = PLUS,
        FOIS | DIVISE => out.insert(debut, MARQUEUR_NEGATIF),
        // nombre collé à autre chose qu’un opérateur (ex: "Error5")
        _ => return expr.to_string(),
    }
    texte(&out)
}

/// % : divise le dernier nombre par 100, le reste de l’expression est intact.
pub fn apply_percent(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let (debut, fin) = bornes(&chars);
    if debut == fin {
        return expr.to_string();
    }

    let segment = texte(&chars[debut..fin]);
    let Ok(valeur) = segment.parse::<f64>() else {
        return expr.to_string();
    };

    let mut out = texte(&chars[..debut]);
    out.push_str(&format_number(valeur / 100.0));
    out
}

/// Nettoie la fin avant "=" : opérateurs, point, marqueur seul. Vide -> "0".
pub fn prepare_for_eval(expr: &str) -> String {
    let mut chars: Vec<char> = expr.chars().collect();
    while let Some(&c) = chars.last() {
        if est_operateur(c) || c == '.' || marqueur_pendant(&chars) {
            chars.pop();
        } else {
            break;
        }
    }

    if chars.is_empty() {
        ZERO.to_string()
    } else {
        texte(&chars)
    }
}
