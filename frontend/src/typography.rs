//! TypographyStudio - the typography state and every control that edits it
//!
//! Each control owns one relay. The studio Actor merges all relay streams
//! into a single ordered event stream and applies each event through the
//! validated setters of [`TypographyState`], so the view never writes state
//! directly.

use crate::analytics;
use crate::dataflow::{Actor, Relay, relay};
use futures::stream::{self, BoxStream, StreamExt};
use shared::{
    AnalyticsEvent, StyleEdit, TextPreset, TypographyState, ViewportMode, serialize,
};

#[derive(Debug)]
enum StudioEvent {
    Edit(StyleEdit),
    Shuffle,
    Copy,
}

#[derive(Clone, Debug)]
pub struct TypographyStudio {
    pub state: Actor<TypographyState>,

    // === TEXT ===
    pub heading_text_changed_relay: Relay<String>,
    pub body_text_changed_relay: Relay<String>,
    pub preset_clicked_relay: Relay<&'static TextPreset>,

    // === FONTS (display names from the selectors) ===
    pub heading_font_selected_relay: Relay<String>,
    pub body_font_selected_relay: Relay<String>,

    // === SLIDERS (raw control values, clamped by the state) ===
    pub heading_size_changed_relay: Relay<f64>,
    pub body_size_changed_relay: Relay<f64>,
    pub heading_weight_changed_relay: Relay<f64>,
    pub body_weight_changed_relay: Relay<f64>,
    pub line_height_changed_relay: Relay<f64>,
    pub letter_spacing_changed_relay: Relay<f64>,

    // === COLORS ===
    pub heading_color_changed_relay: Relay<String>,
    pub body_color_changed_relay: Relay<String>,

    pub viewport_mode_selected_relay: Relay<ViewportMode>,
    pub shuffle_clicked_relay: Relay<()>,
    pub copy_clicked_relay: Relay<()>,
}

impl TypographyStudio {
    /// `copy_requested_relay` receives the serialized stylesheet on export.
    pub fn new(copy_requested_relay: Relay<String>, analytics_enabled: bool) -> Self {
        let (heading_text_changed_relay, heading_text_changed_stream) = relay();
        let (body_text_changed_relay, body_text_changed_stream) = relay();
        let (preset_clicked_relay, preset_clicked_stream) = relay();
        let (heading_font_selected_relay, heading_font_selected_stream) = relay();
        let (body_font_selected_relay, body_font_selected_stream) = relay();
        let (heading_size_changed_relay, heading_size_changed_stream) = relay();
        let (body_size_changed_relay, body_size_changed_stream) = relay();
        let (heading_weight_changed_relay, heading_weight_changed_stream) = relay();
        let (body_weight_changed_relay, body_weight_changed_stream) = relay();
        let (line_height_changed_relay, line_height_changed_stream) = relay();
        let (letter_spacing_changed_relay, letter_spacing_changed_stream) = relay();
        let (heading_color_changed_relay, heading_color_changed_stream) = relay();
        let (body_color_changed_relay, body_color_changed_stream) = relay();
        let (viewport_mode_selected_relay, viewport_mode_selected_stream) = relay();
        let (shuffle_clicked_relay, shuffle_clicked_stream) = relay();
        let (copy_clicked_relay, copy_clicked_stream) = relay();

        let events: Vec<BoxStream<'static, StudioEvent>> = vec![
            edits(heading_text_changed_stream, StyleEdit::HeadingText),
            edits(body_text_changed_stream, StyleEdit::BodyText),
            edits(preset_clicked_stream, StyleEdit::Preset),
            edits(heading_font_selected_stream, StyleEdit::HeadingFont),
            edits(body_font_selected_stream, StyleEdit::BodyFont),
            edits(heading_size_changed_stream, |px| StyleEdit::HeadingSize(whole(px))),
            edits(body_size_changed_stream, |px| StyleEdit::BodySize(whole(px))),
            edits(heading_weight_changed_stream, |weight| {
                StyleEdit::HeadingWeight(whole(weight))
            }),
            edits(body_weight_changed_stream, |weight| StyleEdit::BodyWeight(whole(weight))),
            edits(line_height_changed_stream, StyleEdit::LineHeight),
            edits(letter_spacing_changed_stream, StyleEdit::LetterSpacing),
            edits(heading_color_changed_stream, StyleEdit::HeadingColor),
            edits(body_color_changed_stream, StyleEdit::BodyColor),
            edits(viewport_mode_selected_stream, StyleEdit::Viewport),
            shuffle_clicked_stream.map(|()| StudioEvent::Shuffle).boxed(),
            copy_clicked_stream.map(|()| StudioEvent::Copy).boxed(),
        ];
        let mut events = stream::select_all(events);

        let state = Actor::new(TypographyState::default(), async move |state| {
            while let Some(event) = events.next().await {
                match event {
                    StudioEvent::Edit(edit) => {
                        // Preset texts and title land in one `set_neq`.
                        let mut next = state.get_cloned();
                        match next.apply(edit) {
                            Ok(()) => state.set_neq(next),
                            Err(error) => zoon::eprintln!("STUDIO: Edit rejected: {}", error),
                        }
                    }
                    StudioEvent::Shuffle => {
                        state.lock_mut().randomize_fonts(random_index);
                        analytics::track(analytics_enabled, &AnalyticsEvent::shuffle_fonts());
                    }
                    StudioEvent::Copy => {
                        let (css, event) = {
                            let current = state.lock_ref();
                            (serialize(&current), AnalyticsEvent::copy_css(&current))
                        };
                        copy_requested_relay.send(css);
                        analytics::track(analytics_enabled, &event);
                    }
                }
            }
        });

        Self {
            state,
            heading_text_changed_relay,
            body_text_changed_relay,
            preset_clicked_relay,
            heading_font_selected_relay,
            body_font_selected_relay,
            heading_size_changed_relay,
            body_size_changed_relay,
            heading_weight_changed_relay,
            body_weight_changed_relay,
            line_height_changed_relay,
            letter_spacing_changed_relay,
            heading_color_changed_relay,
            body_color_changed_relay,
            viewport_mode_selected_relay,
            shuffle_clicked_relay,
            copy_clicked_relay,
        }
    }
}

fn edits<T, S>(
    stream: S,
    to_edit: impl Fn(T) -> StyleEdit + Send + 'static,
) -> BoxStream<'static, StudioEvent>
where
    S: futures::Stream<Item = T> + Send + 'static,
{
    stream.map(move |value| StudioEvent::Edit(to_edit(value))).boxed()
}

/// Slider values are whole numbers for sizes and weights; the state clamps.
fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// Uniform index below `len` from the browser's `Math.random`.
fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64) as usize
}
