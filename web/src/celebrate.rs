use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `confetti(options)` from the canvas-confetti script loaded by the page.
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Options passed to the confetti animation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Celebration {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: Origin,
    pub colors: &'static [&'static str],
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread: 70,
            origin: Origin { x: 0.5, y: 0.6 },
            colors: &["#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffffff"],
        }
    }
}

impl Celebration {
    fn to_js(&self) -> Result<JsValue, String> {
        let json = serde_json::to_string(self).map_err(|err| err.to_string())?;
        js_sys::JSON::parse(&json).map_err(|err| format!("{:?}", err))
    }

    /// Fire and forget. A missing animation script only costs a log line.
    pub(crate) fn fire(&self) {
        log::debug!("celebrating: {:?}", self);
        match self.to_js() {
            Ok(options) => {
                if let Err(err) = confetti_js(&options) {
                    log::warn!("confetti failed: {:?}", err);
                }
            }
            Err(err) => log::error!("could not build confetti options: {}", err),
        }
    }
}
