// ===== FONT CATALOG =====

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typeface offered by the studio: the name shown in selectors and the
/// `font-family` value (with generic fallback) applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor {
    pub display_name: &'static str,
    pub family_value: &'static str,
}

/// Fixed catalog, in selector order. Every name is also requested from the
/// remote font service at startup.
pub static FONT_CATALOG: [FontDescriptor; 8] = [
    FontDescriptor {
        display_name: "Noto Sans JP",
        family_value: "'Noto Sans JP', sans-serif",
    },
    FontDescriptor {
        display_name: "Noto Serif JP",
        family_value: "'Noto Serif JP', serif",
    },
    FontDescriptor {
        display_name: "M PLUS 1p",
        family_value: "'M PLUS 1p', sans-serif",
    },
    FontDescriptor {
        display_name: "Sawarabi Mincho",
        family_value: "'Sawarabi Mincho', serif",
    },
    FontDescriptor {
        display_name: "Sawarabi Gothic",
        family_value: "'Sawarabi Gothic', sans-serif",
    },
    FontDescriptor {
        display_name: "Shippori Mincho",
        family_value: "'Shippori Mincho', serif",
    },
    FontDescriptor {
        display_name: "Zen Kaku Gothic New",
        family_value: "'Zen Kaku Gothic New', sans-serif",
    },
    FontDescriptor {
        display_name: "Kaisei Opti",
        family_value: "'Kaisei Opti', serif",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("font '{0}' is not in the catalog")]
    NotFound(String),
}

/// Reference to a catalog entry. Can only be obtained from the catalog, so a
/// selected font is always one of the [`FONT_CATALOG`] entries.
///
/// Serialized as the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontId(usize);

impl FontId {
    pub const NOTO_SANS_JP: FontId = FontId(0);
    pub const NOTO_SERIF_JP: FontId = FontId(1);

    pub fn descriptor(self) -> &'static FontDescriptor {
        &FONT_CATALOG[self.0]
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    pub fn family_value(self) -> &'static str {
        self.descriptor().family_value
    }

    /// Draws one catalog entry. `pick` receives the catalog length and should
    /// return a uniformly distributed index below it; anything larger wraps.
    pub fn draw(mut pick: impl FnMut(usize) -> usize) -> FontId {
        FontId(pick(FONT_CATALOG.len()) % FONT_CATALOG.len())
    }

    /// All fonts in catalog order, for populating selectors.
    pub fn all() -> impl Iterator<Item = FontId> {
        (0..FONT_CATALOG.len()).map(FontId)
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<String> for FontId {
    type Error = CatalogError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        resolve_by_display_name(&name)
    }
}

impl From<FontId> for String {
    fn from(font: FontId) -> Self {
        font.display_name().to_string()
    }
}

pub fn resolve_by_display_name(name: &str) -> Result<FontId, CatalogError> {
    FONT_CATALOG
        .iter()
        .position(|font| font.display_name == name)
        .map(FontId)
        .ok_or_else(|| CatalogError::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_names_are_unique() {
        let names: HashSet<_> = FONT_CATALOG.iter().map(|font| font.display_name).collect();
        assert_eq!(names.len(), FONT_CATALOG.len());
    }

    #[test]
    fn family_values_quote_the_name_and_end_with_a_generic() {
        for font in FONT_CATALOG.iter() {
            assert!(font.family_value.starts_with(&format!("'{}', ", font.display_name)));
            assert!(font.family_value.ends_with("serif"));
        }
    }

    #[test]
    fn resolves_known_names() {
        let font = resolve_by_display_name("Shippori Mincho").unwrap();
        assert_eq!(font.family_value(), "'Shippori Mincho', serif");
        assert_eq!(FontId::NOTO_SERIF_JP.display_name(), "Noto Serif JP");
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            resolve_by_display_name("Comic Sans MS"),
            Err(CatalogError::NotFound("Comic Sans MS".to_string()))
        );
        // Lookup is exact, not case-insensitive.
        assert!(resolve_by_display_name("noto sans jp").is_err());
    }

    #[test]
    fn draw_wraps_out_of_range_indices() {
        assert_eq!(FontId::draw(|_| 9).display_name(), "Noto Serif JP");
        assert_eq!(FontId::draw(|len| len - 1).display_name(), "Kaisei Opti");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&FontId::NOTO_SANS_JP).unwrap();
        assert_eq!(json, "\"Noto Sans JP\"");

        let font: FontId = serde_json::from_str("\"Kaisei Opti\"").unwrap();
        assert_eq!(font.display_name(), "Kaisei Opti");

        assert!(serde_json::from_str::<FontId>("\"Arial\"").is_err());
    }
}
