//! Export sink: puts the generated stylesheet on the system clipboard.
//!
//! The async Clipboard API is tried first. When it is missing or the write is
//! refused, a hidden `<textarea>` is selected and copied with
//! `execCommand("copy")`. Whatever happens, the toast reports the outcome.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use shared::{CopyOutcome, ToastKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Clone, Debug)]
pub struct ClipboardSink {
    /// Stylesheet text to export.
    pub copy_requested_relay: Relay<String>,
    _actor: Actor<()>,
}

impl ClipboardSink {
    pub fn new(toast_requested_relay: Relay<ToastKind>) -> Self {
        let (copy_requested_relay, mut copy_requested_stream) = relay::<String>();

        let actor = Actor::new((), async move |_state| {
            while let Some(text) = copy_requested_stream.next().await {
                let toast_requested_relay = toast_requested_relay.clone();
                // Clipboard promises are not Send; run them on the local executor.
                spawn_local(async move {
                    let outcome = write_text(&text).await;
                    toast_requested_relay.send(outcome.toast_kind());
                });
            }
        });

        Self {
            copy_requested_relay,
            _actor: actor,
        }
    }
}

pub async fn write_text(text: &str) -> CopyOutcome {
    #[cfg(web_sys_unstable_apis)]
    {
        match write_with_clipboard_api(text).await {
            Ok(()) => return CopyOutcome::Clipboard,
            Err(error) => zoon::eprintln!("CLIPBOARD: Clipboard API write failed: {:?}", error),
        }
    }

    match copy_with_selection(text) {
        Ok(()) => CopyOutcome::LegacyFallback,
        Err(error) => {
            let reason = error
                .as_string()
                .unwrap_or_else(|| format!("{:?}", error));
            zoon::eprintln!("CLIPBOARD: Fallback copy failed: {}", reason);
            CopyOutcome::Failed(reason)
        }
    }
}

#[cfg(web_sys_unstable_apis)]
async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn copy_with_selection(text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(JsValue::from)?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "-9999px")?;

    body.append_child(&textarea)?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("document is not an HTML document"))
        .and_then(|document| document.exec_command("copy"));
    body.remove_child(&textarea)?;

    match copied? {
        true => Ok(()),
        false => Err(JsValue::from_str("execCommand(\"copy\") was rejected")),
    }
}
