//! Transient export notice shown at the bottom of the page.

use crate::dataflow::{Actor, Relay, relay};
use crate::theme::*;
use futures::{FutureExt, StreamExt, select};
use js_sys::Date;
use shared::config::ToastSection;
use shared::{ToastKind, ToastState};
use zoon::*;

#[derive(Clone, Debug)]
pub struct ToastNotice {
    pub state: Actor<ToastState>,
    /// Export finished; show the matching notice.
    pub toast_requested_relay: Relay<ToastKind>,
}

impl ToastNotice {
    pub fn new(config: &ToastSection) -> Self {
        let duration_ms = config.duration_ms;
        let (toast_requested_relay, mut toast_requested_stream) = relay();

        let state = Actor::new(ToastState::Hidden, async move |state| {
            loop {
                let requested = match state.get().remaining_ms(Date::now()) {
                    None => toast_requested_stream.next().await,
                    Some(remaining_ms) => select! {
                        // NOTE: .fuse() required, Timer futures are not FusedFuture
                        _ = Timer::sleep(remaining_ms).fuse() => {
                            state.set_neq(state.get().expire(Date::now()));
                            continue;
                        }
                        requested = toast_requested_stream.next() => requested,
                    },
                };
                match requested {
                    // A request while visible moves the deadline.
                    Some(kind) => state.set(ToastState::show(kind, Date::now(), duration_ms)),
                    None => break,
                }
            }
        });

        Self {
            state,
            toast_requested_relay,
        }
    }
}

pub fn toast_banner(toast: &ToastNotice) -> impl Element {
    El::new()
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("bottom", "40px")
                .style("left", "50%")
                .style("transform", "translateX(-50%)")
                .style("z-index", "50")
        })
        .child_signal(
            toast
                .state
                .signal_ref(|toast| toast.visible_kind())
                .map(|kind| kind.map(toast_body)),
        )
}

fn toast_body(kind: ToastKind) -> impl Element {
    let (icon, icon_color, background) = if kind.is_success() {
        ("✓", SUCCESS_ACCENT, PRIMARY_COLOR)
    } else {
        ("!", TEXT_ON_PRIMARY, ERROR_BACKGROUND)
    };
    Row::new()
        .s(Gap::new().x(SPACING_12))
        .s(Padding::new().x(40).y(20))
        .s(RoundedCorners::all(RADIUS_16))
        .s(Background::new().color(background))
        .s(Shadows::new([Shadow::new().y(20).blur(40).color("rgba(15, 23, 42, 0.25)")]))
        .update_raw_el(|raw_el| raw_el.attr("role", "status"))
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::Bold).color(icon_color))
                .child(icon),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Bold)
                    .color(TEXT_ON_PRIMARY))
                .child(kind.message()),
        )
}
