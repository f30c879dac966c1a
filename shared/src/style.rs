// ===== TYPOGRAPHY STATE MODEL =====
//
// Every adjustable parameter of the studio lives in `TypographyState`.
// Numeric inputs are clamped to their domain at the setter, never rejected:
// the controls are range-limited, so out-of-range values only come from
// stale or hand-crafted input.

use crate::catalog::{CatalogError, FontId, resolve_by_display_name};
use crate::presets::{TEXT_PRESETS, TextPreset, preset_by_title};
use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const HEADING_SIZE_RANGE_PX: RangeInclusive<u16> = 10..=80;
pub const BODY_SIZE_RANGE_PX: RangeInclusive<u16> = 10..=24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("'{0}' is not a #RRGGBB color")]
    InvalidColor(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn clamp_size(px: i64, range: &RangeInclusive<u16>) -> u16 {
    px.clamp(i64::from(*range.start()), i64::from(*range.end())) as u16
}

/// Parses the string value reported by a range/number control.
pub fn parse_control_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|number| number.is_finite())
}

// ===== VALUE TYPES =====

/// CSS font weight restricted to 300..=900 in steps of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct FontWeight(u16);

impl FontWeight {
    pub const MIN: FontWeight = FontWeight(300);
    pub const MAX: FontWeight = FontWeight(900);
    pub const STEP: u16 = 100;
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Clamps to the range, then rounds to the nearest step (halves round up).
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        let step = i64::from(Self::STEP);
        FontWeight((((clamped + step / 2) / step) * step) as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unitless body line height, 1.2..=2.4 in steps of 0.1. Stored in tenths so
/// the value formats without binary floating point residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct LineHeight(u8);

impl LineHeight {
    pub const MIN: LineHeight = LineHeight(12);
    pub const MAX: LineHeight = LineHeight(24);
    pub const STEP: f64 = 0.1;

    pub fn clamped(value: f64) -> Self {
        let tenths = if value.is_nan() {
            f64::from(Self::MIN.0)
        } else {
            (value * 10.0).round()
        };
        LineHeight(tenths.clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0)) as u8)
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl From<LineHeight> for f64 {
    fn from(line_height: LineHeight) -> Self {
        line_height.value()
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Letter spacing in em, -0.05..=0.30 in steps of 0.01, shared by heading and
/// body. Stored in hundredths of an em.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct LetterSpacing(i16);

impl LetterSpacing {
    pub const MIN: LetterSpacing = LetterSpacing(-5);
    pub const MAX: LetterSpacing = LetterSpacing(30);
    pub const STEP: f64 = 0.01;

    pub fn clamped(value_em: f64) -> Self {
        let hundredths = if value_em.is_nan() {
            f64::from(Self::MIN.0)
        } else {
            (value_em * 100.0).round()
        };
        LetterSpacing(hundredths.clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0)) as i16)
    }

    pub fn value_em(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<LetterSpacing> for f64 {
    fn from(spacing: LetterSpacing) -> Self {
        spacing.value_em()
    }
}

impl fmt::Display for LetterSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value_em())
    }
}

/// Opaque sRGB color, always formatted as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        HexColor([red, green, blue])
    }

    /// Uppercase form used for the label next to a color picker.
    pub fn label(self) -> String {
        self.to_string().to_uppercase()
    }
}

impl FromStr for HexColor {
    type Err = StyleError;

    /// Accepts `#rrggbb` and the `#rgb` shorthand, with or without `#`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let rgb = Srgb::<u8>::from_str(value.trim())
            .map_err(|_| StyleError::InvalidColor(value.to_string()))?;
        Ok(HexColor([rgb.red, rgb.green, rgb.blue]))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "#{red:02x}{green:02x}{blue:02x}")
    }
}

/// Simulated device width class of the preview container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub const ALL: [ViewportMode; 2] = [ViewportMode::Desktop, ViewportMode::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Desktop => "PC",
            ViewportMode::Mobile => "スマホ",
        }
    }
}

// ===== STATE =====

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyState {
    heading_font: FontId,
    body_font: FontId,
    heading_size_px: u16,
    body_size_px: u16,
    line_height: LineHeight,
    letter_spacing: LetterSpacing,
    heading_weight: FontWeight,
    body_weight: FontWeight,
    heading_color: HexColor,
    body_color: HexColor,
    heading_text: String,
    body_text: String,
    active_preset_title: Option<&'static str>,
    viewport_mode: ViewportMode,
}

impl Default for TypographyState {
    fn default() -> Self {
        let preset = &TEXT_PRESETS[0];
        Self {
            heading_font: FontId::NOTO_SERIF_JP,
            body_font: FontId::NOTO_SANS_JP,
            heading_size_px: 48,
            body_size_px: 16,
            line_height: LineHeight(18),
            letter_spacing: LetterSpacing(5),
            heading_weight: FontWeight::BOLD,
            body_weight: FontWeight::REGULAR,
            heading_color: HexColor::from_rgb(0x0f, 0x17, 0x2a),
            body_color: HexColor::from_rgb(0x33, 0x41, 0x55),
            heading_text: preset.heading_text.to_string(),
            body_text: preset.body_text.to_string(),
            active_preset_title: Some(preset.title),
            viewport_mode: ViewportMode::Desktop,
        }
    }
}

impl TypographyState {
    // --- getters ---

    pub fn heading_font(&self) -> FontId {
        self.heading_font
    }

    pub fn body_font(&self) -> FontId {
        self.body_font
    }

    pub fn heading_size_px(&self) -> u16 {
        self.heading_size_px
    }

    pub fn body_size_px(&self) -> u16 {
        self.body_size_px
    }

    pub fn line_height(&self) -> LineHeight {
        self.line_height
    }

    pub fn letter_spacing(&self) -> LetterSpacing {
        self.letter_spacing
    }

    pub fn heading_weight(&self) -> FontWeight {
        self.heading_weight
    }

    pub fn body_weight(&self) -> FontWeight {
        self.body_weight
    }

    pub fn heading_color(&self) -> HexColor {
        self.heading_color
    }

    pub fn body_color(&self) -> HexColor {
        self.body_color
    }

    pub fn heading_text(&self) -> &str {
        &self.heading_text
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn active_preset_title(&self) -> Option<&'static str> {
        self.active_preset_title
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport_mode
    }

    // --- setters ---

    pub fn set_heading_font(&mut self, font: FontId) {
        self.heading_font = font;
    }

    pub fn set_body_font(&mut self, font: FontId) {
        self.body_font = font;
    }

    pub fn set_heading_size_px(&mut self, px: i64) {
        self.heading_size_px = clamp_size(px, &HEADING_SIZE_RANGE_PX);
    }

    pub fn set_body_size_px(&mut self, px: i64) {
        self.body_size_px = clamp_size(px, &BODY_SIZE_RANGE_PX);
    }

    pub fn set_line_height(&mut self, value: f64) {
        self.line_height = LineHeight::clamped(value);
    }

    pub fn set_letter_spacing_em(&mut self, value_em: f64) {
        self.letter_spacing = LetterSpacing::clamped(value_em);
    }

    pub fn set_heading_weight(&mut self, weight: i64) {
        self.heading_weight = FontWeight::clamped(weight);
    }

    pub fn set_body_weight(&mut self, weight: i64) {
        self.body_weight = FontWeight::clamped(weight);
    }

    /// Leaves the current color untouched when `value` is not a hex color.
    pub fn set_heading_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.heading_color = value.parse()?;
        Ok(())
    }

    /// Leaves the current color untouched when `value` is not a hex color.
    pub fn set_body_color(&mut self, value: &str) -> Result<(), StyleError> {
        self.body_color = value.parse()?;
        Ok(())
    }

    /// Does not clear `active_preset_title`; the preset indicator stays on the
    /// last applied preset after manual edits.
    pub fn set_heading_text(&mut self, text: impl Into<String>) {
        self.heading_text = text.into();
    }

    /// See [`Self::set_heading_text`].
    pub fn set_body_text(&mut self, text: impl Into<String>) {
        self.body_text = text.into();
    }

    pub fn set_viewport_mode(&mut self, mode: ViewportMode) {
        self.viewport_mode = mode;
    }

    /// Replaces both texts and marks the preset active in one mutation.
    pub fn apply_preset(&mut self, preset: &'static TextPreset) {
        self.heading_text = preset.heading_text.to_string();
        self.body_text = preset.body_text.to_string();
        self.active_preset_title = Some(preset.title);
    }

    /// Independent uniform draws for both fonts; the two may coincide.
    /// Nothing but the font fields changes.
    pub fn randomize_fonts(&mut self, mut pick: impl FnMut(usize) -> usize) {
        self.heading_font = FontId::draw(&mut pick);
        self.body_font = FontId::draw(&mut pick);
    }

    /// Single entry point for user edits; routes each one through its setter.
    pub fn apply(&mut self, edit: StyleEdit) -> Result<(), StyleError> {
        match edit {
            StyleEdit::HeadingText(text) => self.set_heading_text(text),
            StyleEdit::BodyText(text) => self.set_body_text(text),
            StyleEdit::Preset(preset) => self.apply_preset(preset),
            StyleEdit::HeadingFont(name) => {
                self.set_heading_font(resolve_by_display_name(&name)?)
            }
            StyleEdit::BodyFont(name) => self.set_body_font(resolve_by_display_name(&name)?),
            StyleEdit::HeadingSize(px) => self.set_heading_size_px(px),
            StyleEdit::BodySize(px) => self.set_body_size_px(px),
            StyleEdit::HeadingWeight(weight) => self.set_heading_weight(weight),
            StyleEdit::BodyWeight(weight) => self.set_body_weight(weight),
            StyleEdit::LineHeight(value) => self.set_line_height(value),
            StyleEdit::LetterSpacing(value_em) => self.set_letter_spacing_em(value_em),
            StyleEdit::HeadingColor(value) => self.set_heading_color(&value)?,
            StyleEdit::BodyColor(value) => self.set_body_color(&value)?,
            StyleEdit::Viewport(mode) => self.set_viewport_mode(mode),
        }
        Ok(())
    }
}

/// One user-driven mutation of [`TypographyState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEdit {
    HeadingText(String),
    BodyText(String),
    Preset(&'static TextPreset),
    /// Font display name, as reported by a selector.
    HeadingFont(String),
    BodyFont(String),
    HeadingSize(i64),
    BodySize(i64),
    HeadingWeight(i64),
    BodyWeight(i64),
    LineHeight(f64),
    LetterSpacing(f64),
    HeadingColor(String),
    BodyColor(String),
    Viewport(ViewportMode),
}

/// Wire shape of [`TypographyState`]. Deserialization goes through the
/// setters, so out-of-range values are clamped and bad colors or unknown
/// presets fall back to defaults.
#[derive(Deserialize)]
struct StateRecord {
    heading_font: FontId,
    body_font: FontId,
    heading_size_px: i64,
    body_size_px: i64,
    line_height: f64,
    letter_spacing: f64,
    heading_weight: i64,
    body_weight: i64,
    heading_color: String,
    body_color: String,
    heading_text: String,
    body_text: String,
    active_preset_title: Option<String>,
    #[serde(default)]
    viewport_mode: ViewportMode,
}

// Hand-written so the `&'static str` preset title does not tie the
// deserializer to `'static` input.
impl<'de> Deserialize<'de> for TypographyState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StateRecord::deserialize(deserializer).map(Self::from)
    }
}

impl From<StateRecord> for TypographyState {
    fn from(record: StateRecord) -> Self {
        let mut state = TypographyState::default();
        state.set_heading_font(record.heading_font);
        state.set_body_font(record.body_font);
        state.set_heading_size_px(record.heading_size_px);
        state.set_body_size_px(record.body_size_px);
        state.set_line_height(record.line_height);
        state.set_letter_spacing_em(record.letter_spacing);
        state.set_heading_weight(record.heading_weight);
        state.set_body_weight(record.body_weight);
        let _ = state.set_heading_color(&record.heading_color);
        let _ = state.set_body_color(&record.body_color);
        state.set_heading_text(record.heading_text);
        state.set_body_text(record.body_text);
        state.active_preset_title = record
            .active_preset_title
            .as_deref()
            .and_then(preset_by_title)
            .map(|preset| preset.title);
        state.set_viewport_mode(record.viewport_mode);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FONT_CATALOG;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_the_reference_pairing() {
        let state = TypographyState::default();
        assert_eq!(state.heading_font().display_name(), "Noto Serif JP");
        assert_eq!(state.body_font().display_name(), "Noto Sans JP");
        assert_eq!(state.heading_size_px(), 48);
        assert_eq!(state.body_size_px(), 16);
        assert_eq!(state.line_height().value(), 1.8);
        assert_eq!(state.letter_spacing().value_em(), 0.05);
        assert_eq!(state.heading_weight().value(), 700);
        assert_eq!(state.body_weight().value(), 400);
        assert_eq!(state.heading_color().to_string(), "#0f172a");
        assert_eq!(state.body_color().to_string(), "#334155");
        assert_eq!(state.active_preset_title(), Some("サービス紹介"));
        assert_eq!(state.heading_text(), TEXT_PRESETS[0].heading_text);
        assert_eq!(state.viewport_mode(), ViewportMode::Desktop);
    }

    #[test]
    fn sizes_clamp_to_the_nearest_boundary() {
        let mut state = TypographyState::default();
        state.set_heading_size_px(999);
        assert_eq!(state.heading_size_px(), 80);
        state.set_heading_size_px(-3);
        assert_eq!(state.heading_size_px(), 10);
        state.set_body_size_px(0);
        assert_eq!(state.body_size_px(), 10);
        state.set_body_size_px(30);
        assert_eq!(state.body_size_px(), 24);
        state.set_body_size_px(18);
        assert_eq!(state.body_size_px(), 18);
    }

    #[test]
    fn weights_clamp_and_snap_to_hundreds() {
        assert_eq!(FontWeight::clamped(100).value(), 300);
        assert_eq!(FontWeight::clamped(1200).value(), 900);
        assert_eq!(FontWeight::clamped(449).value(), 400);
        assert_eq!(FontWeight::clamped(450).value(), 500);
        assert_eq!(FontWeight::clamped(800).value(), 800);
    }

    #[test]
    fn line_height_snaps_to_tenths() {
        assert_eq!(LineHeight::clamped(3.0).value(), 2.4);
        assert_eq!(LineHeight::clamped(0.5).value(), 1.2);
        assert_eq!(LineHeight::clamped(1.74).value(), 1.7);
        assert_eq!(LineHeight::clamped(f64::NAN), LineHeight::MIN);
        assert_eq!(LineHeight::clamped(f64::INFINITY), LineHeight::MAX);
        assert_eq!(LineHeight::clamped(2.0).to_string(), "2");
        assert_eq!(LineHeight::clamped(1.3).to_string(), "1.3");
    }

    #[test]
    fn letter_spacing_snaps_to_hundredths() {
        assert_eq!(LetterSpacing::clamped(-1.0).to_string(), "-0.05");
        assert_eq!(LetterSpacing::clamped(0.5).to_string(), "0.3");
        assert_eq!(LetterSpacing::clamped(0.123).to_string(), "0.12");
        assert_eq!(LetterSpacing::clamped(0.0).to_string(), "0");
    }

    #[test]
    fn colors_normalize_to_lowercase_six_digits() {
        let mut state = TypographyState::default();
        state.set_heading_color("#FF8800").unwrap();
        assert_eq!(state.heading_color().to_string(), "#ff8800");
        assert_eq!(state.heading_color().label(), "#FF8800");

        state.set_body_color("#abc").unwrap();
        assert_eq!(state.body_color().to_string(), "#aabbcc");
    }

    #[test]
    fn invalid_color_is_rejected_and_keeps_previous_value() {
        let mut state = TypographyState::default();
        let result = state.set_heading_color("tomato");
        assert_eq!(result, Err(StyleError::InvalidColor("tomato".to_string())));
        assert_eq!(state.heading_color().to_string(), "#0f172a");
        assert!(state.set_body_color("#12345").is_err());
        assert_eq!(state.body_color().to_string(), "#334155");
    }

    #[test]
    fn preset_replaces_both_texts_and_title() {
        let mut state = TypographyState::default();
        state.set_heading_text("自由入力");
        state.apply_preset(&TEXT_PRESETS[1]);
        assert_eq!(state.heading_text(), TEXT_PRESETS[1].heading_text);
        assert_eq!(state.body_text(), TEXT_PRESETS[1].body_text);
        assert_eq!(state.active_preset_title(), Some("ニュース記事"));
    }

    #[test]
    fn manual_text_edit_keeps_active_preset() {
        let mut state = TypographyState::default();
        state.set_body_text("手入力した本文");
        assert_eq!(state.body_text(), "手入力した本文");
        assert_eq!(state.active_preset_title(), Some("サービス紹介"));
    }

    #[test]
    fn randomize_only_touches_fonts() {
        let mut state = TypographyState::default();
        state.set_heading_size_px(60);
        let before = state.clone();

        let mut draws = [3, 3].into_iter();
        state.randomize_fonts(|_| draws.next().unwrap());

        assert_eq!(state.heading_font(), state.body_font());
        assert_eq!(state.heading_font().display_name(), "Sawarabi Mincho");

        let mut restored = state.clone();
        restored.set_heading_font(before.heading_font());
        restored.set_body_font(before.body_font());
        assert_eq!(restored, before);
    }

    #[test]
    fn apply_routes_edits_through_setters() {
        let mut state = TypographyState::default();
        state.apply(StyleEdit::HeadingSize(999)).unwrap();
        state.apply(StyleEdit::LetterSpacing(0.12)).unwrap();
        state.apply(StyleEdit::BodyFont("Kaisei Opti".to_string())).unwrap();
        state.apply(StyleEdit::Viewport(ViewportMode::Mobile)).unwrap();
        assert_eq!(state.heading_size_px(), 80);
        assert_eq!(state.letter_spacing().to_string(), "0.12");
        assert_eq!(state.body_font().display_name(), "Kaisei Opti");
        assert_eq!(state.viewport_mode(), ViewportMode::Mobile);

        let error = state.apply(StyleEdit::HeadingFont("Arial".to_string()));
        assert_eq!(
            error,
            Err(StyleError::Catalog(CatalogError::NotFound("Arial".to_string())))
        );
        assert_eq!(state.heading_font().display_name(), "Noto Serif JP");
    }

    #[test]
    fn control_numbers_parse_finite_values_only() {
        assert_eq!(parse_control_number(" 1.8 "), Some(1.8));
        assert_eq!(parse_control_number("-0.05"), Some(-0.05));
        assert_eq!(parse_control_number("NaN"), None);
        assert_eq!(parse_control_number("inf"), None);
        assert_eq!(parse_control_number(""), None);
    }

    #[test]
    fn serde_round_trip_preserves_state() {
        let mut state = TypographyState::default();
        state.apply_preset(&TEXT_PRESETS[1]);
        state.set_line_height(2.2);
        state.set_viewport_mode(ViewportMode::Mobile);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["heading_font"], "Noto Serif JP");
        assert_eq!(json["line_height"], 2.2);
        assert_eq!(json["viewport_mode"], "mobile");

        let restored: TypographyState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn deserializes_from_owned_runtime_input() {
        fn assert_owned<T: serde::de::DeserializeOwned>() {}
        assert_owned::<TypographyState>();

        let mut state = TypographyState::default();
        state.set_heading_size_px(64);
        let json: String = serde_json::to_string(&state).unwrap();
        let restored: TypographyState = serde_json::from_str(&json).unwrap();
        drop(json);
        assert_eq!(restored, state);
        assert_eq!(restored.active_preset_title(), Some(TEXT_PRESETS[0].title));
    }

    #[test]
    fn deserialization_clamps_out_of_range_fields() {
        let mut json = serde_json::to_value(TypographyState::default()).unwrap();
        json["heading_size_px"] = serde_json::json!(500);
        json["letter_spacing"] = serde_json::json!(-2.0);
        json["body_color"] = serde_json::json!("not a color");
        json["active_preset_title"] = serde_json::json!("存在しない");

        let state: TypographyState = serde_json::from_value(json).unwrap();
        assert_eq!(state.heading_size_px(), 80);
        assert_eq!(state.letter_spacing(), LetterSpacing::MIN);
        assert_eq!(state.body_color().to_string(), "#334155");
        assert_eq!(state.active_preset_title(), None);
    }

    proptest! {
        #[test]
        fn numeric_setters_stay_in_domain(
            heading in any::<i64>(),
            body in any::<i64>(),
            weight in any::<i64>(),
            line in -10.0f64..10.0,
            spacing in -2.0f64..2.0,
        ) {
            let mut state = TypographyState::default();
            state.set_heading_size_px(heading);
            state.set_body_size_px(body);
            state.set_heading_weight(weight);
            state.set_line_height(line);
            state.set_letter_spacing_em(spacing);

            prop_assert!(HEADING_SIZE_RANGE_PX.contains(&state.heading_size_px()));
            prop_assert!(BODY_SIZE_RANGE_PX.contains(&state.body_size_px()));
            prop_assert!(state.heading_weight() >= FontWeight::MIN);
            prop_assert!(state.heading_weight() <= FontWeight::MAX);
            prop_assert_eq!(state.heading_weight().value() % FontWeight::STEP, 0);
            prop_assert!(state.line_height() >= LineHeight::MIN && state.line_height() <= LineHeight::MAX);
            prop_assert!(state.letter_spacing() >= LetterSpacing::MIN && state.letter_spacing() <= LetterSpacing::MAX);
        }

        #[test]
        fn out_of_range_sizes_land_on_the_nearest_boundary(px in 81i64..10_000) {
            let mut state = TypographyState::default();
            state.set_heading_size_px(px);
            prop_assert_eq!(state.heading_size_px(), 80);
            state.set_heading_size_px(-px);
            prop_assert_eq!(state.heading_size_px(), 10);
        }

        #[test]
        fn randomized_fonts_stay_in_catalog(draws in proptest::collection::vec(any::<usize>(), 2..40)) {
            let mut state = TypographyState::default();
            for pair in draws.chunks(2) {
                let mut values = pair.iter().copied().cycle();
                state.randomize_fonts(|_| values.next().unwrap_or(0));
                prop_assert!(FONT_CATALOG.contains(state.heading_font().descriptor()));
                prop_assert!(FONT_CATALOG.contains(state.body_font().descriptor()));
            }
        }
    }
}
