//! Control panel: text editing, presets, fonts, weights, colors, sliders and
//! the shuffle/export buttons. Every control reads the studio state through a
//! signal and reports changes through its own relay.

use crate::dataflow::{Actor, Relay};
use crate::theme::*;
use crate::typography::TypographyStudio;
use shared::style::{BODY_SIZE_RANGE_PX, HEADING_SIZE_RANGE_PX};
use shared::{
    FontId, HexColor, LetterSpacing, LineHeight, TEXT_PRESETS, TextPreset,
    TypographyState, parse_control_number,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

type StudioState = Actor<TypographyState>;

pub fn control_panel(studio: &TypographyStudio) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_24))
        .item(text_card(studio))
        .item(typography_card(studio))
}

fn card(title: &'static str, icon: &'static str, content: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(28))
        .s(Gap::new().y(SPACING_16))
        .s(Background::new().color(SURFACE))
        .s(RoundedCorners::all(RADIUS_16))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Padding::new().bottom(SPACING_16))
                .s(Borders::new().bottom(Border::new().width(1).color(SURFACE_MUTED)))
                .item(El::new().s(Font::new().color(PRIMARY_COLOR)).child(icon))
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::Bold))
                        .child(title),
                ),
        )
        .item(content)
}

fn field_label(text: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_10)
            .weight(FontWeight::Heavy)
            .color(TEXT_MUTED)
            .tracking(1))
        .child(text)
}

fn section_label(text: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Bold)
            .color(TEXT_MUTED)
            .tracking(1))
        .child(text)
}

// ===== TEXT EDITING =====

fn text_card(studio: &TypographyStudio) -> impl Element {
    card(
        "テキスト編集",
        "✎",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_16))
            .item(
                Column::new()
                    .s(Gap::new().y(SPACING_8))
                    .item(field_label("見出し"))
                    .item(heading_input(studio)),
            )
            .item(
                Column::new()
                    .s(Gap::new().y(SPACING_8))
                    .item(field_label("本文"))
                    .item(body_input(studio)),
            )
            .item(
                Column::new()
                    .s(Gap::new().y(SPACING_8))
                    .item(field_label("プリセット"))
                    .item(
                        Row::new().s(Gap::new().x(SPACING_8)).multiline().items(
                            TEXT_PRESETS
                                .iter()
                                .map(|preset| preset_button(&studio.state, preset, &studio.preset_clicked_relay)),
                        ),
                    ),
            ),
    )
}

fn heading_input(studio: &TypographyStudio) -> impl Element {
    let heading_text_changed_relay = studio.heading_text_changed_relay.clone();
    TextInput::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_12))
        .s(RoundedCorners::all(RADIUS_12))
        .s(Background::new().color(PAGE_BACKGROUND))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .s(Font::new().size(FONT_SIZE_14))
        .label_hidden("見出し")
        .text_signal(studio.state.signal_ref(|state| state.heading_text().to_string()))
        .on_change(move |text| heading_text_changed_relay.send(text))
}

fn body_input(studio: &TypographyStudio) -> impl Element {
    let body_text_changed_relay = studio.body_text_changed_relay.clone();
    TextArea::new()
        .s(Width::fill())
        .s(Height::exact(160))
        .s(Padding::all(SPACING_12))
        .s(RoundedCorners::all(RADIUS_12))
        .s(Background::new().color(PAGE_BACKGROUND))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .s(Font::new().size(FONT_SIZE_14).line_height(22))
        .label_hidden("本文")
        .text_signal(studio.state.signal_ref(|state| state.body_text().to_string()))
        .on_change(move |text| body_text_changed_relay.send(text))
}

fn preset_button(
    state: &StudioState,
    preset: &'static TextPreset,
    preset_clicked_relay: &Relay<&'static TextPreset>,
) -> impl Element {
    let is_active = move |state: &TypographyState| state.active_preset_title() == Some(preset.title);
    let preset_clicked_relay = preset_clicked_relay.clone();
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(RoundedCorners::all(RADIUS_8))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .s(Background::new().color_signal(
            state
                .signal_ref(is_active)
                .map_bool(|| PRIMARY_COLOR, || SURFACE),
        ))
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Bold)
            .color_signal(
                state
                    .signal_ref(is_active)
                    .map_bool(|| TEXT_ON_PRIMARY, || TEXT_SECONDARY),
            ))
        .label(preset.title)
        .on_press(move || preset_clicked_relay.send(preset))
}

// ===== TYPOGRAPHY =====

fn typography_card(studio: &TypographyStudio) -> impl Element {
    card(
        "タイポグラフィ",
        "Aa",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_24))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_16))
                    .item(font_select(
                        "見出しフォント",
                        &studio.state,
                        |state| state.heading_font(),
                        studio.heading_font_selected_relay.clone(),
                    ))
                    .item(font_select(
                        "本文フォント",
                        &studio.state,
                        |state| state.body_font(),
                        studio.body_font_selected_relay.clone(),
                    )),
            )
            .item(weight_section(studio))
            .item(color_section(studio))
            .item(size_section(studio))
            .item(action_buttons(studio)),
    )
}

fn font_select(
    label: &'static str,
    state: &StudioState,
    read: fn(&TypographyState) -> FontId,
    font_selected_relay: Relay<String>,
) -> impl Element {
    let select = RawHtmlEl::new("select")
        .attr("aria-label", label)
        .style("width", "100%")
        .style("padding", "10px")
        .style("border-radius", "12px")
        .style("border", &format!("1px solid {BORDER_COLOR}"))
        .style("background-color", PAGE_BACKGROUND)
        .style("font-size", "14px")
        .children(FontId::all().map(|font| {
            RawHtmlEl::new("option")
                .attr("value", font.display_name())
                .child(font.display_name())
        }))
        .prop_signal("value", state.signal_ref(move |state| read(state).display_name()));
    let select = on_control_value(select, "change", move |name| font_selected_relay.send(name));

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_8))
        .item(field_label(label))
        .item(select)
}

fn weight_section(studio: &TypographyStudio) -> impl Element {
    let weight_slider = |label: &'static str,
                         read: fn(&TypographyState) -> shared::FontWeight,
                         weight_changed_relay: &Relay<f64>| {
        slider(
            SliderSpec {
                label,
                min: f64::from(shared::FontWeight::MIN.value()),
                max: f64::from(shared::FontWeight::MAX.value()),
                step: f64::from(shared::FontWeight::STEP),
            },
            &studio.state,
            move |state| read(state).to_string(),
            move |state| read(state).to_string(),
            weight_changed_relay.clone(),
        )
    };
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .item(section_label("ウェイト (太さ)"))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_16))
                .item(weight_slider(
                    "見出し",
                    |state| state.heading_weight(),
                    &studio.heading_weight_changed_relay,
                ))
                .item(weight_slider(
                    "本文",
                    |state| state.body_weight(),
                    &studio.body_weight_changed_relay,
                )),
        )
}

fn color_section(studio: &TypographyStudio) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .item(section_label("カラー"))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_16))
                .item(color_picker(
                    "見出しの色",
                    &studio.state,
                    |state| state.heading_color(),
                    studio.heading_color_changed_relay.clone(),
                ))
                .item(color_picker(
                    "本文の色",
                    &studio.state,
                    |state| state.body_color(),
                    studio.body_color_changed_relay.clone(),
                )),
        )
}

fn color_picker(
    label: &'static str,
    state: &StudioState,
    read: fn(&TypographyState) -> HexColor,
    color_changed_relay: Relay<String>,
) -> impl Element {
    let input = RawHtmlEl::new("input")
        .attr("type", "color")
        .attr("aria-label", label)
        .style("width", "40px")
        .style("height", "40px")
        .style("padding", "0")
        .style("border", "none")
        .style("background", "none")
        .style("cursor", "pointer")
        .prop_signal("value", state.signal_ref(move |state| read(state).to_string()));
    let input = on_control_value(input, "input", move |color| color_changed_relay.send(color));

    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_8))
        .s(Padding::all(SPACING_8))
        .s(RoundedCorners::all(RADIUS_12))
        .s(Background::new().color(PAGE_BACKGROUND))
        .s(Borders::all(Border::new().width(1).color(SURFACE_MUTED)))
        .item(input)
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_10).family(MONO_FAMILY.map(FontFamily::new)))
                .child(Text::with_signal(state.signal_ref(move |state| read(state).label()))),
        )
}

fn size_section(studio: &TypographyStudio) -> impl Element {
    let state = &studio.state;
    let px_range = |range: &std::ops::RangeInclusive<u16>| {
        (f64::from(*range.start()), f64::from(*range.end()))
    };
    let (heading_min, heading_max) = px_range(&HEADING_SIZE_RANGE_PX);
    let (body_min, body_max) = px_range(&BODY_SIZE_RANGE_PX);

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(slider(
            SliderSpec {
                label: "Heading Size",
                min: heading_min,
                max: heading_max,
                step: 1.0,
            },
            state,
            |state| state.heading_size_px().to_string(),
            |state| format!("{}px", state.heading_size_px()),
            studio.heading_size_changed_relay.clone(),
        ))
        .item(slider(
            SliderSpec {
                label: "Body Size",
                min: body_min,
                max: body_max,
                step: 1.0,
            },
            state,
            |state| state.body_size_px().to_string(),
            |state| format!("{}px", state.body_size_px()),
            studio.body_size_changed_relay.clone(),
        ))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_16))
                .item(slider(
                    SliderSpec {
                        label: "Line",
                        min: LineHeight::MIN.value(),
                        max: LineHeight::MAX.value(),
                        step: LineHeight::STEP,
                    },
                    state,
                    |state| state.line_height().to_string(),
                    |state| state.line_height().to_string(),
                    studio.line_height_changed_relay.clone(),
                ))
                .item(slider(
                    SliderSpec {
                        label: "Letter",
                        min: LetterSpacing::MIN.value_em(),
                        max: LetterSpacing::MAX.value_em(),
                        step: LetterSpacing::STEP,
                    },
                    state,
                    |state| state.letter_spacing().to_string(),
                    |state| format!("{}em", state.letter_spacing()),
                    studio.letter_spacing_changed_relay.clone(),
                )),
        )
}

struct SliderSpec {
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
}

fn slider(
    spec: SliderSpec,
    state: &StudioState,
    value: impl Fn(&TypographyState) -> String + Send + Sync + 'static,
    readout: impl Fn(&TypographyState) -> String + Send + Sync + 'static,
    value_changed_relay: Relay<f64>,
) -> impl Element {
    let input = RawHtmlEl::new("input")
        .attr("type", "range")
        .attr("aria-label", spec.label)
        .attr("min", &spec.min.to_string())
        .attr("max", &spec.max.to_string())
        .attr("step", &spec.step.to_string())
        .style("width", "100%")
        .style("accent-color", PRIMARY_COLOR)
        .prop_signal("value", state.signal_ref(value));
    let input = on_control_value(input, "input", move |raw| match parse_control_number(&raw) {
        Some(number) => value_changed_relay.send(number),
        None => zoon::eprintln!("CONTROLS: Ignoring non-numeric slider value '{}'", raw),
    });

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_8))
        .item(
            Row::new()
                .s(Width::fill())
                .item(
                    El::new()
                        .s(Width::fill())
                        .s(Font::new()
                            .size(FONT_SIZE_10)
                            .weight(FontWeight::Bold)
                            .color(TEXT_MUTED)
                            .tracking(1))
                        .child(spec.label),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_10)
                            .color(PRIMARY_COLOR)
                            .family(MONO_FAMILY.map(FontFamily::new)))
                        .child(Text::with_signal(state.signal_ref(readout))),
                ),
        )
        .item(input)
}

// ===== ACTIONS =====

fn action_buttons(studio: &TypographyStudio) -> impl Element {
    let shuffle_clicked_relay = studio.shuffle_clicked_relay.clone();
    let copy_clicked_relay = studio.copy_clicked_relay.clone();
    let button_base = || {
        Button::new()
            .s(Width::fill())
            .s(Padding::new().y(SPACING_16))
            .s(RoundedCorners::all(RADIUS_12))
            .s(Align::new().center_x())
    };
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .s(Padding::new().top(SPACING_32))
        .s(Borders::new().top(Border::new().width(1).color(SURFACE_MUTED)))
        .item(
            button_base()
                .s(Background::new().color(PAGE_BACKGROUND))
                .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
                .s(Font::new()
                    .weight(FontWeight::Heavy)
                    .color(TEXT_SECONDARY)
                    .center())
                .label("↻ シャッフル")
                .on_press(move || shuffle_clicked_relay.send(())),
        )
        .item(
            button_base()
                .s(Background::new().color(PRIMARY_COLOR))
                .s(Font::new()
                    .weight(FontWeight::Heavy)
                    .color(TEXT_ON_PRIMARY)
                    .center())
                .label("⧉ CSSをコピー")
                .on_press(move || copy_clicked_relay.send(())),
        )
}

// ===== DOM HELPERS =====

/// Forwards the element's `value` property on every `event_name` event.
fn on_control_value(
    raw_el: RawHtmlEl<web_sys::HtmlElement>,
    event_name: &'static str,
    on_value: impl Fn(String) + 'static,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let value = event
            .current_target()
            .and_then(|target| {
                js_sys::Reflect::get(&target, &wasm_bindgen::JsValue::from_str("value")).ok()
            })
            .and_then(|value| value.as_string());
        if let Some(value) = value {
            on_value(value);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(error) = raw_el
        .dom_element()
        .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
    {
        zoon::eprintln!("CONTROLS: Cannot listen for '{}': {:?}", event_name, error);
    }
    listener.forget();
    raw_el
}
