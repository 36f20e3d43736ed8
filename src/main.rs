// src/main.rs
//
// Calculatrice bilingue : point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Journal (natif)            : tracing-subscriber, filtre RUST_LOG (défaut: info)
// - Chiffres devanagari        : police ajoutée en secours (natif : police système,
//                                web : assets/fonts/ servi avec index.html)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculator";

/* ------------------------ Police devanagari ------------------------ */

/// Emplacements usuels d’une police couvrant ०-९ (première trouvée = retenue).
#[cfg(not(target_arch = "wasm32"))]
const POLICES_DEVANAGARI: [&str; 7] = [
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/DevanagariMT.ttc",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
];

#[cfg(not(target_arch = "wasm32"))]
fn lire_police_systeme() -> Option<(&'static str, Vec<u8>)> {
    POLICES_DEVANAGARI
        .iter()
        .find_map(|chemin| std::fs::read(chemin).ok().map(|octets| (*chemin, octets)))
}

/// Ajoute la police devanagari en secours (natif + web).
fn installer_polices(ctx: &egui::Context, origine: &str, octets: Vec<u8>) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("devanagari".to_string(), FontData::from_owned(octets).into());

    // En secours seulement : les glyphes latins restent ceux d’egui.
    for famille in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(famille)
            .or_default()
            .push("devanagari".to_string());
    }

    ctx.set_fonts(fonts);
    tracing::info!(origine, "police devanagari chargée");
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 640.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // Contexte egui prêt => polices avant la première frame.
            match lire_police_systeme() {
                Some((chemin, octets)) => installer_polices(&cc.egui_ctx, chemin, octets),
                None => tracing::warn!(
                    "aucune police devanagari trouvée : chiffres ०-९ possiblement illisibles"
                ),
            }
            Ok(Box::new(AppCalc::depuis_stockage(cc.storage)))
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{installer_polices, AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{window, HtmlCanvasElement, Response};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Police devanagari, relative à la page (copiée à côté d’index.html au déploiement).
    const POLICE_WEB: &str = "assets/fonts/NotoSansDevanagari-Regular.ttf";

    async fn telecharger_police() -> Result<Vec<u8>, wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let reponse: Response = JsFuture::from(w.fetch_with_str(POLICE_WEB))
            .await?
            .dyn_into()?;
        if !reponse.ok() {
            return Err(js_err("police devanagari absente du déploiement"));
        }
        let octets = JsFuture::from(reponse.array_buffer()?).await?;
        Ok(js_sys::Uint8Array::new(&octets).to_vec())
    }

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Télécharge la police devanagari (facultative)
    /// - Démarre eframe WebRunner dessus, thème relu depuis localStorage
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

        // Pas de police : l’appli démarre quand même (chiffres latins lisibles).
        let police = match telecharger_police().await {
            Ok(octets) => Some(octets),
            Err(e) => {
                tracing::warn!(erreur = ?e, "police devanagari non chargée");
                None
            }
        };

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    if let Some(octets) = police {
                        installer_polices(&cc.egui_ctx, POLICE_WEB, octets);
                    }
                    Ok(Box::new(AppCalc::depuis_stockage(cc.storage)))
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
