// ===== ANALYTICS EVENTS =====

use crate::style::TypographyState;
use serde::Serialize;

/// Event parameters, serialized as a flat object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnalyticsParams {
    Fonts {
        heading_font: &'static str,
        body_font: &'static str,
    },
    Action {
        action: &'static str,
    },
}

/// Fire-and-forget notification for an external collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub params: AnalyticsParams,
}

impl AnalyticsEvent {
    pub fn copy_css(state: &TypographyState) -> Self {
        Self {
            action: "copy_css",
            params: AnalyticsParams::Fonts {
                heading_font: state.heading_font().display_name(),
                body_font: state.body_font().display_name(),
            },
        }
    }

    pub fn shuffle_fonts() -> Self {
        Self {
            action: "shuffle_fonts",
            params: AnalyticsParams::Action { action: "click" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copy_event_carries_selected_fonts() {
        let event = AnalyticsEvent::copy_css(&TypographyState::default());
        assert_eq!(event.action, "copy_css");
        assert_eq!(
            serde_json::to_value(&event.params).unwrap(),
            json!({ "heading_font": "Noto Serif JP", "body_font": "Noto Sans JP" })
        );
    }

    #[test]
    fn shuffle_event_params() {
        let event = AnalyticsEvent::shuffle_fonts();
        assert_eq!(event.action, "shuffle_fonts");
        assert_eq!(
            serde_json::to_value(&event.params).unwrap(),
            json!({ "action": "click" })
        );
    }
}
