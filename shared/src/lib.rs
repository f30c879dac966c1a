//! Pure core of the KumiFont studio: font catalog, text presets, the
//! typography state model and its two transforms (live preview and CSS
//! export). Shared by the frontend and free of browser dependencies, so it
//! is tested natively.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod feedback;
pub mod font_link;
pub mod presets;
pub mod preview;
pub mod style;
pub mod stylesheet;

pub use analytics::{AnalyticsEvent, AnalyticsParams};
pub use catalog::{CatalogError, FONT_CATALOG, FontDescriptor, FontId, resolve_by_display_name};
pub use config::{AppConfig, ConfigError};
pub use feedback::{CopyOutcome, ModalKind, ModalState, ToastKind, ToastState};
pub use font_link::FontStylesheetLink;
pub use presets::{TEXT_PRESETS, TextPreset, preset_by_title};
pub use preview::{BlockStyle, Declaration, RenderedPreview, TextBlock, ViewportWidth, render};
pub use style::{
    FontWeight, HexColor, LetterSpacing, LineHeight, StyleEdit, StyleError, TypographyState,
    ViewportMode, parse_control_number,
};
pub use stylesheet::{StyleRule, serialize};
