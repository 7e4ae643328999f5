// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (f64)
//
// Règles:
// - * / lient plus fort que + - (précédence 2 vs 1), tout est associatif à gauche
// - pas de parenthèses
// - un littéral qui ne se lit pas comme un nombre ("-", ".") est écarté sans erreur

use super::erreur::ErreurCalcul;
use super::jetons::{Op, Tok};

/// Sous ce seuil, un dénominateur est considéré nul.
pub const EPSILON_DIVISION: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rpn {
    Num(f64),
    Op(Op),
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Rpn> {
    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(texte) => match texte.parse::<f64>() {
                Ok(v) => out.push(Rpn::Num(v)),
                Err(_) => tracing::debug!(litteral = %texte, "littéral écarté"),
            },

            Tok::Op(op) => {
                // dépile tant que le sommet lie au moins aussi fort (gauche)
                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Rpn::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        out.push(Rpn::Op(op));
    }

    out
}

/// Évalue une RPN avec une seule pile numérique.
pub fn eval_rpn(rpn: &[Rpn]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match *tok {
            Rpn::Num(v) => st.push(v),
            Rpn::Op(op) => {
                // sommet = 2e opérande
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(ErreurCalcul::OperandesManquantes { op: op.symbole() });
                };

                let r = match op {
                    Op::Plus => a + b,
                    Op::Minus => a - b,
                    Op::Star => a * b,
                    Op::Slash => {
                        if b.abs() < EPSILON_DIVISION {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(r);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::PileInvalide {
            profondeur: st.len(),
        }),
    }
}

/// Format utilitaire (démarche).
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|t| match t {
            Rpn::Num(v) => format!("{v}"),
            Rpn::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
