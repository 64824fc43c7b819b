// Arranque en navegador (build WASM)

use crate::QuizApp;
use crate::config::QuizConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "the_canvas_id";

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Info);

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run().await {
            log::error!("no se pudo arrancar la app web: {err:?}");
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No existe document en entorno WASM."))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("No se encontró el canvas"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let config = QuizConfig::load();
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
        )
        .await
}
