// src/noyau/format.rs

/// Chiffres après la virgule avant élagage.
pub const DECIMALES: usize = 10;

/// Sentinelle unique affichée pour tout échec.
pub const ERREUR: &str = "Error";

/// f64 -> texte affichable.
/// - 10 décimales, puis retrait des zéros finaux et du point final
/// - -0 devient "0"
/// - infini / NaN -> "Error"
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERREUR.to_string();
    }

    let brut = format!("{value:.prec$}", prec = DECIMALES);
    let elague = brut.trim_end_matches('0').trim_end_matches('.');

    // couvre -0.0 et les petits négatifs arrondis (-0.00000000001)
    if elague == "-0" {
        "0".to_string()
    } else {
        elague.to_string()
    }
}
