// ===== FONT STYLESHEET REQUEST =====

use crate::catalog::FONT_CATALOG;
use crate::config::FontServiceSection;

/// The `<link rel="stylesheet">` that pulls every catalog family from the
/// font service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStylesheetLink {
    pub id: String,
    pub href: String,
}

impl FontStylesheetLink {
    pub fn for_catalog(service: &FontServiceSection) -> Self {
        let weights = service
            .weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let families = FONT_CATALOG
            .iter()
            .map(|font| format!("family={}:wght@{weights}", font.display_name.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");
        Self {
            id: service.link_id.clone(),
            href: format!("{}?{families}&display={}", service.stylesheet_url, service.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_every_family_with_all_weights() {
        let link = FontStylesheetLink::for_catalog(&FontServiceSection::default());
        assert_eq!(link.id, "google-fonts-link");
        assert!(link.href.starts_with(
            "https://fonts.googleapis.com/css2?family=Noto+Sans+JP:wght@300;400;500;700;900&family=Noto+Serif+JP:"
        ));
        assert!(link.href.contains("&family=Zen+Kaku+Gothic+New:wght@300;400;500;700;900&"));
        assert!(link.href.ends_with("&display=swap"));
        assert_eq!(link.href.matches("family=").count(), FONT_CATALOG.len());
    }

    #[test]
    fn building_twice_yields_the_same_link() {
        let service = FontServiceSection::default();
        assert_eq!(
            FontStylesheetLink::for_catalog(&service),
            FontStylesheetLink::for_catalog(&service)
        );
    }
}
