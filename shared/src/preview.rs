// ===== PREVIEW RENDERER =====
//
// Pure transform from the typography state to what the preview shows. The
// frontend applies `BlockStyle::declarations` verbatim as inline styles and
// the stylesheet serializer prints the same declarations, so the copied CSS
// always matches the preview.

use crate::catalog::FontId;
use crate::style::{FontWeight, HexColor, LetterSpacing, LineHeight, TypographyState, ViewportMode};
use std::fmt;

pub const MOBILE_VIEWPORT_WIDTH_PX: u32 = 375;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportWidth {
    Fill,
    Exact(u32),
}

impl ViewportWidth {
    pub fn for_mode(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Desktop => ViewportWidth::Fill,
            ViewportMode::Mobile => ViewportWidth::Exact(MOBILE_VIEWPORT_WIDTH_PX),
        }
    }
}

impl fmt::Display for ViewportWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportWidth::Fill => f.write_str("100%"),
            ViewportWidth::Exact(px) => write!(f, "{px}px"),
        }
    }
}

/// One CSS `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl fmt::Display) -> Self {
        Self {
            property,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyle {
    pub font: FontId,
    pub font_weight: FontWeight,
    pub font_size_px: u16,
    pub color: HexColor,
    /// Only the body block sets a line height.
    pub line_height: Option<LineHeight>,
    pub letter_spacing: LetterSpacing,
}

impl BlockStyle {
    /// Declarations in output order: family, weight, size, color, then
    /// line-height (body only) and letter-spacing.
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = vec![
            Declaration::new("font-family", self.font.family_value()),
            Declaration::new("font-weight", self.font_weight),
            Declaration::new("font-size", format_args!("{}px", self.font_size_px)),
            Declaration::new("color", self.color),
        ];
        if let Some(line_height) = self.line_height {
            declarations.push(Declaration::new("line-height", line_height));
        }
        declarations.push(Declaration::new(
            "letter-spacing",
            format_args!("{}em", self.letter_spacing),
        ));
        declarations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub style: BlockStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPreview {
    pub viewport: ViewportWidth,
    /// Mobile previews draw a device status bar above the content.
    pub device_frame: bool,
    pub heading: TextBlock,
    pub body: TextBlock,
}

pub fn heading_style(state: &TypographyState) -> BlockStyle {
    BlockStyle {
        font: state.heading_font(),
        font_weight: state.heading_weight(),
        font_size_px: state.heading_size_px(),
        color: state.heading_color(),
        line_height: None,
        letter_spacing: state.letter_spacing(),
    }
}

pub fn body_style(state: &TypographyState) -> BlockStyle {
    BlockStyle {
        font: state.body_font(),
        font_weight: state.body_weight(),
        font_size_px: state.body_size_px(),
        color: state.body_color(),
        line_height: Some(state.line_height()),
        letter_spacing: state.letter_spacing(),
    }
}

pub fn render(state: &TypographyState) -> RenderedPreview {
    RenderedPreview {
        viewport: ViewportWidth::for_mode(state.viewport_mode()),
        device_frame: state.viewport_mode() == ViewportMode::Mobile,
        heading: TextBlock {
            text: state.heading_text().to_string(),
            style: heading_style(state),
        },
        body: TextBlock {
            text: state.body_text().to_string(),
            style: body_style(state),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(declarations: &'a [Declaration], property: &str) -> Option<&'a str> {
        declarations
            .iter()
            .find(|declaration| declaration.property == property)
            .map(|declaration| declaration.value.as_str())
    }

    #[test]
    fn default_state_renders_full_width() {
        let preview = render(&TypographyState::default());
        assert_eq!(preview.viewport, ViewportWidth::Fill);
        assert_eq!(preview.viewport.to_string(), "100%");
        assert!(!preview.device_frame);
    }

    #[test]
    fn mobile_mode_renders_exactly_375_wide() {
        let mut state = TypographyState::default();
        state.set_viewport_mode(ViewportMode::Mobile);
        let preview = render(&state);
        assert_eq!(preview.viewport, ViewportWidth::Exact(375));
        assert_eq!(preview.viewport.to_string(), "375px");
        assert!(preview.device_frame);
    }

    #[test]
    fn heading_declarations_follow_state() {
        let preview = render(&TypographyState::default());
        let declarations = preview.heading.style.declarations();
        let properties: Vec<_> = declarations.iter().map(|d| d.property).collect();
        assert_eq!(
            properties,
            ["font-family", "font-weight", "font-size", "color", "letter-spacing"]
        );
        assert_eq!(value_of(&declarations, "font-family"), Some("'Noto Serif JP', serif"));
        assert_eq!(value_of(&declarations, "font-size"), Some("48px"));
        assert_eq!(value_of(&declarations, "letter-spacing"), Some("0.05em"));
        assert_eq!(preview.heading.text, TypographyState::default().heading_text());
    }

    #[test]
    fn body_carries_line_height() {
        let mut state = TypographyState::default();
        state.set_line_height(2.0);
        state.set_body_weight(300);
        let declarations = render(&state).body.style.declarations();
        assert_eq!(value_of(&declarations, "line-height"), Some("2"));
        assert_eq!(value_of(&declarations, "font-weight"), Some("300"));
        assert_eq!(value_of(&declarations, "color"), Some("#334155"));
        assert_eq!(declarations.last().map(|d| d.property), Some("letter-spacing"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut state = TypographyState::default();
        state.set_body_text("同じ入力");
        assert_eq!(render(&state), render(&state));
    }
}
