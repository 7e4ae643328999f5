//! Tests fuzz safe : suites de touches aléatoires sur l’éditeur.
//!
//! But : marteler l’éditeur + l’évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée (comme l’affichage : 16 caractères)
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::symboles::{est_operateur, MARQUEUR_NEGATIF};
use super::{
    append_digit_or_dot, append_operator, apply_percent, backspace, evaluate_to_string,
    prepare_for_eval, toggle_sign, ERREUR,
};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

const LONGUEUR_MAX: usize = 16;

fn tronque(s: String) -> String {
    s.chars().take(LONGUEUR_MAX).collect()
}

fn touche(rng: &mut Rng, expr: &str) -> String {
    let r = match rng.pick(10) {
        0..=3 => {
            let d = char::from(b'0' + rng.pick(10) as u8);
            append_digit_or_dot(expr, d)
        }
        4 => append_digit_or_dot(expr, '.'),
        5 => {
            let op = ['+', '−', '×', '÷'][rng.pick(4) as usize];
            append_operator(expr, op)
        }
        6 => backspace(expr),
        7 => toggle_sign(expr),
        8 => apply_percent(expr),
        _ => append_operator(expr, '+'),
    };
    tronque(r)
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(expr: &str) {
    assert!(!expr.is_empty(), "expression vide");

    let premier = expr.chars().next().unwrap_or('0');
    assert!(!est_operateur(premier), "commence par un opérateur: {expr:?}");

    for nombre in expr.split(est_operateur) {
        let points = nombre.chars().filter(|&c| c == '.').count();
        assert!(points <= 1, "plusieurs points dans {nombre:?} (expr={expr:?})");

        // le marqueur ne vit qu’en tête d’un nombre
        assert!(
            !nombre.chars().skip(1).any(|c| c == MARQUEUR_NEGATIF),
            "marqueur au milieu d’un nombre: {expr:?}"
        );
    }
}

fn check_evaluation(expr: &str) {
    let res = evaluate_to_string(&prepare_for_eval(expr));
    if res != ERREUR {
        assert!(
            res.parse::<f64>().is_ok(),
            "résultat illisible {res:?} pour {expr:?}"
        );
        assert_ne!(res, "-0");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_edition() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut expr = "0".to_string();
        for _ in 0..40 {
            expr = touche(&mut rng, &expr);
            check_invariants(&expr);
        }
        check_evaluation(&expr);
    }
}

#[test]
fn fuzz_safe_signe_involution() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut expr = "0".to_string();

    for _ in 0..2000 {
        budget(t0, max);

        expr = touche(&mut rng, &expr);
        // le marqueur seul ("-") redevient "0"
        if expr == "-" {
            assert_eq!(toggle_sign(&expr), "0");
            continue;
        }
        assert_eq!(toggle_sign(&toggle_sign(&expr)), expr, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties
    let run = |seed| {
        let mut rng = Rng::new(seed);
        let mut expr = "0".to_string();
        let mut sorties = Vec::new();
        for _ in 0..300 {
            expr = touche(&mut rng, &expr);
            sorties.push(evaluate_to_string(&prepare_for_eval(&expr)));
        }
        sorties
    };
    assert_eq!(run(42), run(42));
}
