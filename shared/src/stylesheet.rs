// ===== STYLESHEET SERIALIZER =====

use crate::preview::{Declaration, body_style, heading_style};
use crate::style::TypographyState;
use std::fmt;

pub const HEADING_SELECTOR: &str = "h1";
pub const BODY_SELECTOR: &str = "body";

/// A commented rule block, printed with one declaration per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub comment: &'static str,
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* {} */", self.comment)?;
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "  {}: {};", declaration.property, declaration.value)?;
        }
        write!(f, "}}")
    }
}

pub fn rules(state: &TypographyState) -> [StyleRule; 2] {
    [
        StyleRule {
            comment: "見出し",
            selector: HEADING_SELECTOR,
            declarations: heading_style(state).declarations(),
        },
        StyleRule {
            comment: "本文",
            selector: BODY_SELECTOR,
            declarations: body_style(state).declarations(),
        },
    ]
}

/// Stylesheet fragment for the copy-to-clipboard export.
pub fn serialize(state: &TypographyState) -> String {
    let [heading, body] = rules(state);
    format!("{heading}\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::render;
    use crate::style::ViewportMode;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    /// Splits serialized CSS back into selector -> (property -> value).
    fn parse_rules(css: &str) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut parsed = BTreeMap::new();
        let mut current: Option<String> = None;
        for line in css.lines().map(str::trim) {
            if let Some(selector) = line.strip_suffix(" {") {
                current = Some(selector.to_string());
                parsed.insert(selector.to_string(), BTreeMap::new());
            } else if line == "}" {
                current = None;
            } else if let (Some(selector), Some((property, value))) =
                (current.as_ref(), line.strip_suffix(';').and_then(|l| l.split_once(": ")))
            {
                parsed
                    .get_mut(selector)
                    .unwrap()
                    .insert(property.to_string(), value.to_string());
            }
        }
        parsed
    }

    fn as_map(declarations: &[Declaration]) -> BTreeMap<String, String> {
        declarations
            .iter()
            .map(|d| (d.property.to_string(), d.value.clone()))
            .collect()
    }

    #[test]
    fn default_state_serializes_to_the_reference_layout() {
        let css = serialize(&TypographyState::default());
        let expected = "\
/* 見出し */
h1 {
  font-family: 'Noto Serif JP', serif;
  font-weight: 700;
  font-size: 48px;
  color: #0f172a;
  letter-spacing: 0.05em;
}

/* 本文 */
body {
  font-family: 'Noto Sans JP', sans-serif;
  font-weight: 400;
  font-size: 16px;
  color: #334155;
  line-height: 1.8;
  letter-spacing: 0.05em;
}";
        assert_eq!(css, expected);
    }

    #[test]
    fn default_values_sit_under_their_rules() {
        let parsed = parse_rules(&serialize(&TypographyState::default()));
        assert_eq!(parsed["h1"]["font-size"], "48px");
        assert_eq!(parsed["body"]["line-height"], "1.8");
        assert!(!parsed["h1"].contains_key("line-height"));
    }

    #[test]
    fn letter_spacing_is_shared_by_both_rules() {
        let mut state = TypographyState::default();
        state.set_letter_spacing_em(0.12);
        let parsed = parse_rules(&serialize(&state));
        assert_eq!(parsed["h1"]["letter-spacing"], "0.12em");
        assert_eq!(parsed["body"]["letter-spacing"], "0.12em");
    }

    #[test]
    fn output_is_stable() {
        let state = TypographyState::default();
        assert_eq!(serialize(&state), serialize(&state));
    }

    fn arbitrary_state() -> impl Strategy<Value = TypographyState> {
        (
            (0usize..8, 0usize..8, 10i64..=80, 10i64..=24),
            (12u8..=24, -5i16..=30, 3i64..=9, 3i64..=9),
            (any::<[u8; 3]>(), any::<[u8; 3]>(), any::<bool>()),
        )
            .prop_map(
                |(
                    (heading_font, body_font, heading_px, body_px),
                    (line_tenths, spacing_hundredths, heading_weight, body_weight),
                    (heading_rgb, body_rgb, mobile),
                )| {
                    let mut state = TypographyState::default();
                    let mut fonts = [heading_font, body_font].into_iter();
                    state.randomize_fonts(|_| fonts.next().unwrap_or(0));
                    state.set_heading_size_px(heading_px);
                    state.set_body_size_px(body_px);
                    state.set_line_height(f64::from(line_tenths) / 10.0);
                    state.set_letter_spacing_em(f64::from(spacing_hundredths) / 100.0);
                    state.set_heading_weight(heading_weight * 100);
                    state.set_body_weight(body_weight * 100);
                    let hex = |[r, g, b]: [u8; 3]| format!("#{r:02x}{g:02x}{b:02x}");
                    state.set_heading_color(&hex(heading_rgb)).unwrap();
                    state.set_body_color(&hex(body_rgb)).unwrap();
                    if mobile {
                        state.set_viewport_mode(ViewportMode::Mobile);
                    }
                    state
                },
            )
    }

    proptest! {
        #[test]
        fn serialized_values_match_rendered_values(state in arbitrary_state()) {
            let preview = render(&state);
            let parsed = parse_rules(&serialize(&state));
            prop_assert_eq!(&parsed["h1"], &as_map(&preview.heading.style.declarations()));
            prop_assert_eq!(&parsed["body"], &as_map(&preview.body.style.declarations()));
        }
    }
}
