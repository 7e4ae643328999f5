//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir l’expression affichée + le drapeau "vient d’évaluer", et envoyer
//! chaque touche vers l’éditeur ou l’évaluateur du noyau.
//!
//! Contrats :
//! - Aucune logique d’édition ici (tout passe par crate::noyau).
//! - Une touche = une transition complète, sans effet de bord caché.
//! - Défense en profondeur : longueur d’affichage bornée.

use std::ops::RangeInclusive;

use crate::noyau::{self, symboles, Demarche, ERREUR};

/// Longueur d’affichage par défaut (caractères).
pub const LONGUEUR_MAX: usize = 16;

/// Garde-fou : bornes de la longueur réglable.
const LONGUEUR_BORNES: RangeInclusive<usize> = 1..=64;

const EXPRESSION_INITIALE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    /// glyphe d’affichage : + − × ÷
    Operateur(char),
    Egal,
    Effacer,
    Retour,
    Signe,
    Pourcent,
}

impl Touche {
    /// Libellé d’un bouton du pavé ("7", "×", "±", "C", ...).
    pub fn depuis_libelle(libelle: &str) -> Option<Touche> {
        let mut it = libelle.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Touche::depuis_char(c),
            _ => None,
        }
    }

    /// Caractère tapé (clavier ou rejeu). Alias ASCII acceptés : - * / < ~
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            '=' | '\n' => Some(Touche::Egal),
            'C' | 'c' => Some(Touche::Effacer),
            '⌫' | '<' => Some(Touche::Retour),
            '±' | '~' => Some(Touche::Signe),
            '%' => Some(Touche::Pourcent),
            _ => symboles::operateur_affiche(c).map(Touche::Operateur),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Edition,
    JusteEvalue,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage ---
    pub expression: String,
    pub mode: Mode,

    // --- démarche de la dernière évaluation réussie ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub longueur_max: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: EXPRESSION_INITIALE.to_string(),
            mode: Mode::Edition,
            demarche: Demarche::default(),
            longueur_max: LONGUEUR_MAX,
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Une touche = une transition.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::trace!(?touche, expression = %self.expression, mode = ?self.mode, "touche");

        // Après "=", un chiffre ou un point démarre une nouvelle expression.
        if let (Mode::JusteEvalue, Touche::Chiffre(c)) = (self.mode, touche) {
            let neuve = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.set_expression(neuve);
            self.mode = Mode::Edition;
            return;
        }

        let suivante = match touche {
            Touche::Chiffre(c) => noyau::append_digit_or_dot(&self.expression, c),
            Touche::Operateur(op) => noyau::append_operator(&self.expression, op),
            Touche::Retour => noyau::backspace(&self.expression),
            Touche::Signe => noyau::toggle_sign(&self.expression),
            Touche::Pourcent => noyau::apply_percent(&self.expression),
            Touche::Effacer => {
                self.demarche = Demarche::default();
                EXPRESSION_INITIALE.to_string()
            }
            Touche::Egal => self.evaluer(),
        };

        // "Error" ne compte pas comme un résultat : le chiffre suivant s’y ajoute.
        self.mode = if touche == Touche::Egal && suivante != ERREUR {
            Mode::JusteEvalue
        } else {
            Mode::Edition
        };
        self.set_expression(suivante);
    }

    /// Rejoue une suite de caractères ; les caractères inconnus sont ignorés.
    /// Retourne le nombre de touches appliquées.
    pub fn rejouer(&mut self, touches: &str) -> usize {
        let mut n = 0;
        for c in touches.chars() {
            match Touche::depuis_char(c) {
                Some(t) => {
                    self.appuyer(t);
                    n += 1;
                }
                None => tracing::debug!(caractere = %c, "touche inconnue ignorée"),
            }
        }
        n
    }

    fn evaluer(&mut self) -> String {
        let propre = noyau::prepare_for_eval(&self.expression);
        match noyau::eval_avec_demarche(&propre) {
            Ok((v, d)) => {
                self.demarche = d;
                noyau::format_number(v)
            }
            Err(e) => {
                tracing::debug!(expression = %propre, erreur = %e, "évaluation échouée");
                self.demarche = Demarche::default();
                ERREUR.to_string()
            }
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// C : retour à "0".
    pub fn clear_entree(&mut self) {
        self.appuyer(Touche::Effacer);
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.mode == Mode::JusteEvalue
    }

    /// Garde-fou : borne la longueur d’affichage (et re-tronque l’expression).
    pub fn set_longueur_max(&mut self, n: usize) {
        self.longueur_max = n.clamp(*LONGUEUR_BORNES.start(), *LONGUEUR_BORNES.end());
        let e = std::mem::take(&mut self.expression);
        self.set_expression(e);
    }

    /// Taille de police de l’affichage selon la longueur.
    pub fn taille_police(&self) -> f32 {
        match self.expression.chars().count() {
            n if n > 12 => 30.0,
            n if n > 8 => 38.0,
            _ => 48.0,
        }
    }

    fn set_expression(&mut self, s: String) {
        self.expression = s.chars().take(self.longueur_max).collect();
    }
}
