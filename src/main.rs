// src/main.rs
//
// Calculatrice flottante — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// - NATIF, mode lignes (`--lignes`) : une expression par ligne sur stdin,
//   "ligne = résultat" sur stdout. Ex: `printf '1+2\n' | calculatrice_flottante --lignes`
// - NATIF, mode graphique : eframe::run_native + NativeOptions
// - WEB (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Journaux (natif) : RUST_LOG=debug montre chaque groupe réduit.
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice flottante";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

/// Front-end choisi au lancement.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Lignes,
    Graphique,
}

/// `--lignes` seul décide du mode lignes : lancée depuis un bureau, l’app a
/// souvent un stdin qui n’est pas un terminal (/dev/null) et doit ouvrir sa fenêtre.
#[cfg(not(target_arch = "wasm32"))]
fn choisir_mode<I: IntoIterator<Item = String>>(args: I) -> Mode {
    if args.into_iter().skip(1).any(|a| a == "--lignes") {
        Mode::Lignes
    } else {
        Mode::Graphique
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if choisir_mode(std::env::args()) == Mode::Lignes {
        let stdin = std::io::stdin();
        match console::executer(stdin.lock(), std::io::stdout().lock(), std::io::stderr()) {
            Ok(bilan) => log::info!(
                "{} ligne(s) évaluée(s), {} en erreur",
                bilan.evaluees,
                bilan.en_erreur
            ),
            Err(e) => {
                log::error!("lecture/écriture impossible: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 680.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
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

    /// Point d’entrée automatique au chargement de la page.
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

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
