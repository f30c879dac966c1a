//! Bridge to the page's optional `gtag` collector.

use shared::AnalyticsEvent;
use wasm_bindgen::{JsCast, JsValue};

/// Fire-and-forget. Does nothing when analytics is disabled or the page has
/// no `window.gtag` function.
pub fn track(enabled: bool, event: &AnalyticsEvent) {
    if !enabled {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return;
    };

    let params = match serde_wasm_bindgen::to_value(&event.params) {
        Ok(params) => params,
        Err(error) => {
            zoon::eprintln!("ANALYTICS: Cannot encode '{}' params: {}", event.action, error);
            return;
        }
    };
    if let Err(error) = gtag.call3(
        &JsValue::UNDEFINED,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.action),
        &params,
    ) {
        zoon::eprintln!("ANALYTICS: gtag('{}') threw {:?}", event.action, error);
    }
}
