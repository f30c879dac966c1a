//! KumiFontApp - Self-contained Actor+Relay Architecture

use zoon::*;

use crate::clipboard::ClipboardSink;
use crate::controls::control_panel;
use crate::dataflow::Atom;
use crate::font_loader::ensure_font_stylesheet;
use crate::modal::{modal_layer, modal_link};
use crate::preview_panel::preview_panel;
use crate::theme::*;
use crate::toast::{ToastNotice, toast_banner};
use crate::typography::TypographyStudio;
use shared::{AppConfig, FontStylesheetLink, ModalKind, ModalState, ViewportMode};

pub struct KumiFontApp {
    /// Typography state and its controls
    pub studio: TypographyStudio,

    /// Export notice
    pub toast: ToastNotice,

    /// Kept alive so copy requests keep being served
    _clipboard: ClipboardSink,

    // === UI STATE (Atom pattern for local UI concerns) ===
    /// Which header dialog is open
    pub modal: Atom<ModalState>,
}

impl KumiFontApp {
    pub fn new() -> Self {
        let config = Self::load_config();

        // Fonts load in the background; text renders in fallback faces until then.
        if let Err(error) = ensure_font_stylesheet(&FontStylesheetLink::for_catalog(&config.fonts)) {
            zoon::eprintln!("FONTS: Cannot request font stylesheet: {:?}", error);
        }

        let toast = ToastNotice::new(&config.toast);
        let clipboard = ClipboardSink::new(toast.toast_requested_relay.clone());
        let studio = TypographyStudio::new(
            clipboard.copy_requested_relay.clone(),
            config.analytics.enabled,
        );

        KumiFontApp {
            studio,
            toast,
            _clipboard: clipboard,
            modal: Atom::new(ModalState::Closed),
        }
    }

    fn load_config() -> AppConfig {
        match AppConfig::bundled() {
            Ok(config) => {
                zoon::println!("CONFIG: Loaded bundled configuration v{}", config.app.version);
                config
            }
            Err(error) => {
                zoon::eprintln!("CONFIG: {}; using defaults", error);
                AppConfig::default()
            }
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Stack::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Background::new().color(PAGE_BACKGROUND))
            .s(Font::new().color(TEXT_DEFAULT).family([
                FontFamily::new("Noto Sans JP"),
                FontFamily::new("system-ui"),
                FontFamily::SansSerif,
            ]))
            .layer(self.main_layout())
            .layer(toast_banner(&self.toast))
            .layer(modal_layer(&self.modal))
    }

    fn main_layout(&self) -> impl Element {
        Column::new()
            .s(Width::fill().max(1280))
            .s(Align::new().center_x())
            .s(Padding::all(SPACING_32))
            .s(Gap::new().y(48))
            .item(self.header())
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_32))
                    .multiline()
                    .item(
                        El::new()
                            .s(Width::fill().min(320).max(420))
                            .s(Align::new().top())
                            .child(control_panel(&self.studio)),
                    )
                    .item(
                        El::new()
                            .s(Width::growable())
                            .s(Align::new().top())
                            .update_raw_el(|raw_el| {
                                raw_el
                                    .style("position", "sticky")
                                    .style("top", "32px")
                                    .style("min-width", "320px")
                            })
                            .child(preview_panel(&self.studio)),
                    ),
            )
    }

    fn header(&self) -> impl Element {
        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_24))
            .multiline()
            .item(
                Column::new()
                    .s(Width::growable())
                    .s(Gap::new().y(SPACING_8))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_30)
                                .weight(FontWeight::Heavy)
                                .color(TEXT_STRONG)
                                .tracking(-1))
                            .child("KumiFont"),
                    )
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(11)
                                .weight(FontWeight::Medium)
                                .color(TEXT_SECONDARY))
                            .child("日本語フォントの最適な組み合わせをデザインする"),
                    )
                    .item(
                        Row::new()
                            .s(Gap::new().x(SPACING_12))
                            .item(modal_link(&self.modal, ModalKind::Informational))
                            .item(modal_link(&self.modal, ModalKind::Policy)),
                    ),
            )
            .item(self.viewport_toggle())
    }

    fn viewport_toggle(&self) -> impl Element {
        let state = &self.studio.state;
        Row::new()
            .s(Align::new().center_y())
            .s(Padding::all(SPACING_4))
            .s(Gap::new().x(SPACING_4))
            .s(Background::new().color(SURFACE))
            .s(RoundedCorners::all(RADIUS_12))
            .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
            .items(ViewportMode::ALL.map(|mode| {
                let is_selected = move |state: &shared::TypographyState| state.viewport_mode() == mode;
                let viewport_mode_selected_relay =
                    self.studio.viewport_mode_selected_relay.clone();
                Button::new()
                    .s(Padding::new().x(20).y(10))
                    .s(RoundedCorners::all(RADIUS_8))
                    .s(Background::new().color_signal(
                        state
                            .signal_ref(is_selected)
                            .map_bool(|| PRIMARY_COLOR, || "transparent"),
                    ))
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Bold)
                        .color_signal(
                            state
                                .signal_ref(is_selected)
                                .map_bool(|| TEXT_ON_PRIMARY, || TEXT_MUTED),
                        ))
                    .label(format!(
                        "{} {}",
                        match mode {
                            ViewportMode::Desktop => "🖥",
                            ViewportMode::Mobile => "📱",
                        },
                        mode.label()
                    ))
                    .on_press(move || viewport_mode_selected_relay.send(mode))
            }))
    }
}
