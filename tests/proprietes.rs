use calculatrice_saisie::noyau::{
    append_digit_or_dot, append_operator, apply_percent, backspace, evaluate_to_string,
    prepare_for_eval, toggle_sign, ERREUR,
};
use proptest::prelude::*;

const LONGUEUR_MAX: usize = 16;

/// Rejoue des touches d’édition depuis "0" (troncature comme l’affichage).
fn expression_depuis(touches: &[u8]) -> String {
    let mut e = "0".to_string();
    for &t in touches {
        let suivante = match t % 12 {
            0..=4 => append_digit_or_dot(&e, char::from(b'0' + t % 10)),
            5 => append_digit_or_dot(&e, '.'),
            6 => append_operator(&e, '+'),
            7 => append_operator(&e, '−'),
            8 => append_operator(&e, if (t / 12) % 2 == 0 { '×' } else { '÷' }),
            9 => backspace(&e),
            10 => toggle_sign(&e),
            _ => apply_percent(&e),
        };
        e = suivante.chars().take(LONGUEUR_MAX).collect();
    }
    e
}

fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..40).prop_map(|t| expression_depuis(&t))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_backspace_annule_un_chiffre(e in expression(), d in 0u8..10) {
        if e.chars().count() >= LONGUEUR_MAX {
            return Ok(());
        }
        let apres = backspace(&append_digit_or_dot(&e, char::from(b'0' + d)));
        // "0" / "-0" : le zéro est remplacé par le chiffre, pas prolongé
        let zero_remplace = e.trim_start_matches('-') == "0";
        prop_assert!(
            zero_remplace || apres.chars().count() == e.chars().count(),
            "e={:?} apres={:?}", e, apres
        );
    }

    #[test]
    fn prop_signe_involution(e in expression()) {
        if e == "-" {
            return Ok(());
        }
        prop_assert_eq!(toggle_sign(&toggle_sign(&e)), e);
    }

    #[test]
    fn prop_evaluation_jamais_de_panique(s in "\\PC{0,24}") {
        let r = evaluate_to_string(&prepare_for_eval(&s));
        prop_assert!(r == ERREUR || r.parse::<f64>().is_ok(), "r={:?}", r);
    }

    #[test]
    fn prop_resultat_point_fixe(e in expression()) {
        let r = evaluate_to_string(&prepare_for_eval(&e));
        if r == ERREUR || r.starts_with('-') {
            return Ok(());
        }

        // ressaisi comme une nouvelle expression, le résultat se réévalue à lui-même
        let ressaisi = r.chars().fold("0".to_string(), |acc, c| append_digit_or_dot(&acc, c));
        prop_assert_eq!(evaluate_to_string(&ressaisi), r);
    }

    #[test]
    fn prop_addition_entiere(a in 0i64..100_000, b in 0i64..100_000) {
        prop_assert_eq!(evaluate_to_string(&format!("{a}+{b}")), (a + b).to_string());
        prop_assert_eq!(evaluate_to_string(&format!("{a}−{b}")), (a - b).to_string());
        prop_assert_eq!(evaluate_to_string(&format!("{a}×{b}")), (a * b).to_string());
    }

    #[test]
    fn prop_pourcent_entier(n in 0u32..1_000_000) {
        let attendu = evaluate_to_string(&format!("{n}÷100"));
        prop_assert_eq!(apply_percent(&n.to_string()), attendu);
    }

    #[test]
    fn prop_operateur_unique_en_attente(e in expression(), ops in prop::collection::vec(0usize..4, 1..6)) {
        let symboles = ['+', '−', '×', '÷'];
        let mut x = e.clone();
        for &o in &ops {
            x = append_operator(&x, symboles[o]);
        }
        let dernier = symboles[ops[ops.len() - 1]];
        prop_assert!(x.ends_with(dernier));
        let avant: Vec<char> = x.chars().rev().skip(1).take(1).collect();
        prop_assert!(avant.iter().all(|c| !symboles.contains(c)), "x={:?}", x);
    }
}

#[test]
fn exemples_de_reference() {
    assert_eq!(evaluate_to_string("2+3"), "5");
    assert_eq!(evaluate_to_string("10÷4"), "2.5");
    assert_eq!(evaluate_to_string("5÷0"), "Error");
    assert_eq!(apply_percent("50"), "0.5");
    assert_eq!(apply_percent("200"), "2");
    assert_eq!(append_operator("5+", '×'), "5×");
    assert_eq!(append_digit_or_dot("0", '.'), "0.");
    assert_eq!(append_digit_or_dot("0.", '.'), "0.");
    assert_eq!(prepare_for_eval("5+"), "5");
    assert_eq!(prepare_for_eval(""), "0");
}
