// src/main.rs
//
// Calculatrice de saisie — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF : fenêtre eframe, ou rejeu sans fenêtre (--touches / --eval)
// - WEB (wasm32) : eframe::WebRunner + <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use calculatrice_saisie::app::etat::LONGUEUR_MAX;
use calculatrice_saisie::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use super::{AppCalc, LONGUEUR_MAX, TITRE_APP};

    use calculatrice_saisie::noyau;
    use clap::Parser;
    use eframe::egui;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_saisie")]
    #[command(about = "Calculatrice : ligne d’expression éditée touche par touche.")]
    #[command(version)]
    pub struct Cli {
        /// Rejoue une suite de touches sans fenêtre, puis affiche l’écran (ex: "12+3=")
        ///
        /// Touches: 0-9 . + - * / × ÷ − = C < (retour) ~ (±) %
        #[arg(short, long, value_name = "TOUCHES")]
        touches: Option<String>,

        /// Évalue une expression sans fenêtre (ex: "10÷4")
        #[arg(short, long, value_name = "EXPRESSION", conflicts_with = "touches")]
        eval: Option<String>,

        /// Longueur maximale de l’affichage
        #[arg(short, long, default_value_t = LONGUEUR_MAX)]
        longueur_max: usize,
    }

    fn installer_journal() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "calculatrice_saisie=info".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn lancer() -> eframe::Result<()> {
        let cli = Cli::parse();
        installer_journal();

        let mut app = AppCalc::default();
        app.set_longueur_max(cli.longueur_max);

        if let Some(expr) = cli.eval {
            println!("{}", noyau::evaluate_to_string(&noyau::prepare_for_eval(&expr)));
            return Ok(());
        }

        if let Some(touches) = cli.touches {
            let n = app.rejouer(&touches);
            tracing::info!(touches = n, mode = ?app.mode, "rejeu terminé");
            println!("{}", app.expression);
            return Ok(());
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([360.0, 560.0])
                .with_min_inner_size([340.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(TITRE_APP, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    natif::lancer()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
