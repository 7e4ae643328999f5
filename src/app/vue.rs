// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé fixe : C ± % ÷ / 7 8 9 × / 4 5 6 − / 1 2 3 + / 0 . ⌫ =
// - Clavier : caractères tapés, Enter évalue, Backspace efface
// - Affichage aligné à droite, police réduite quand l’expression s’allonge

use eframe::egui;

use super::etat::{AppCalc, Touche};

/// Rangées du pavé (libellés = touches).
const PAVE: [[&str; 4]; 5] = [
    ["C", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["0", ".", "⌫", "="],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.clavier(ui);

        self.ui_affichage(ui);

        ui.add_space(12.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let taille = self.taille_police();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(&self.expression)
                    .size(taille)
                    .monospace(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for libelle in rangee {
                        self.bouton(ui, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str) {
        let texte = egui::RichText::new(libelle).size(24.0);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        if let Some(t) = Touche::depuis_libelle(libelle) {
            self.appuyer(t);
        }
    }

    /// Clavier : caractères tapés + Enter / Backspace.
    /// (Escape est géré dans app.rs, comme le bouton "C".)
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let touches: Vec<Touche> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => {
                        let mut it = t.chars();
                        match (it.next(), it.next()) {
                            (Some(c), None) => Touche::depuis_char(c),
                            _ => None,
                        }
                    }
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => Some(Touche::Egal),
                    egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } => Some(Touche::Retour),
                    _ => None,
                })
                .collect()
        });

        for t in touches {
            self.appuyer(t);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Calcul", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }
}
