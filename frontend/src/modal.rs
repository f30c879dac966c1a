//! About and privacy policy dialogs.

use crate::dataflow::Atom;
use crate::theme::*;
use shared::{ModalKind, ModalState};
use zoon::*;

fn paragraphs(kind: ModalKind) -> &'static [&'static str] {
    match kind {
        ModalKind::Informational => &[
            "KumiFontは、日本語の見出しと本文に使うフォントの組み合わせを、実際の文章で確かめるためのツールです。",
            "フォント・サイズ・ウェイト・色・行間・字間を調整し、できあがったスタイルをCSSとしてコピーできます。",
        ],
        ModalKind::Policy => &[
            "入力したテキストや調整した設定は、ブラウザの外へ送信・保存されません。ページを閉じると破棄されます。",
            "フォントはGoogle Fontsから読み込まれます。利用状況の把握のため、アクセス解析ツールを使用する場合があります。",
        ],
    }
}

/// Header link that opens `kind`.
pub fn modal_link(modal: &Atom<ModalState>, kind: ModalKind) -> impl Element {
    let modal = modal.clone();
    Button::new()
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Medium)
            .color(TEXT_SECONDARY)
            .line(FontLine::new().underline()))
        .label(kind.title())
        .on_press(move || modal.set(ModalState::open(kind)))
}

/// Overlay for the open dialog; empty while closed.
pub fn modal_layer(modal: &Atom<ModalState>) -> impl Element {
    let modal_for_dialog = modal.clone();
    El::new().child_signal(modal.signal_ref(|modal| modal.kind()).map(move |kind| {
        kind.map({
            let modal = modal_for_dialog.clone();
            move |kind| dialog(modal, kind)
        })
    }))
}

fn dialog(modal: Atom<ModalState>, kind: ModalKind) -> impl Element {
    let close = {
        let modal = modal.clone();
        move || modal.set(ModalState::Closed)
    };

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Background::new().color(OVERLAY_BACKDROP))
        .s(Padding::all(SPACING_24))
        .update_raw_el({
            let close = close.clone();
            move |raw_el| {
                raw_el
                    .style("display", "flex")
                    .style("position", "fixed")
                    .style("inset", "0")
                    .style("z-index", "100")
                    .style("justify-content", "center")
                    .style("align-items", "center")
                    .attr("role", "dialog")
                    .attr("aria-modal", "true")
                    .event_handler({
                        let close = close.clone();
                        move |_event: Click| close()
                    })
                    .global_event_handler(move |event: KeyDown| {
                        if event.key() == "Escape" {
                            close();
                        }
                    })
            }
        })
        .child(
            Column::new()
                .s(Width::fill().max(480))
                .s(Padding::all(SPACING_32))
                .s(Gap::new().y(SPACING_16))
                .s(Background::new().color(SURFACE))
                .s(RoundedCorners::all(RADIUS_16))
                .update_raw_el(|raw_el| {
                    raw_el.event_handler(|event: Click| {
                        event.stop_propagation();
                    })
                })
                .item(
                    Row::new()
                        .s(Width::fill())
                        .item(
                            El::new()
                                .s(Width::fill())
                                .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::Bold))
                                .child(kind.title()),
                        )
                        .item(
                            Button::new()
                                .s(Font::new().size(FONT_SIZE_18).color(TEXT_MUTED))
                                .label("✕")
                                .on_press(close),
                        ),
                )
                .items(paragraphs(kind).iter().map(|text| {
                    Paragraph::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .color(TEXT_SECONDARY)
                            .line_height(24))
                        .content(*text)
                })),
        )
}
