use shared::FontStylesheetLink;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlLinkElement;

/// Points the font `<link>` in `<head>` at `link.href`, creating it on first
/// use. Later calls find the element by id, so the page never holds more
/// than one font stylesheet link.
pub fn ensure_font_stylesheet(link: &FontStylesheetLink) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(existing) = document.get_element_by_id(&link.id) {
        let existing: HtmlLinkElement = existing.dyn_into().map_err(JsValue::from)?;
        if existing.href() != link.href {
            existing.set_href(&link.href);
        }
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let element: HtmlLinkElement = document
        .create_element("link")?
        .dyn_into()
        .map_err(JsValue::from)?;
    element.set_id(&link.id);
    element.set_rel("stylesheet");
    element.set_href(&link.href);
    head.append_child(&element)?;

    zoon::println!("FONTS: Requested {} font families", shared::FONT_CATALOG.len());
    Ok(())
}
