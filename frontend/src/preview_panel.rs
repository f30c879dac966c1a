//! Live preview. The heading and body elements carry exactly the
//! declarations produced by `shared::preview`, applied as inline styles.

use crate::dataflow::Actor;
use crate::theme::*;
use crate::typography::TypographyStudio;
use shared::preview::{BlockStyle, body_style, heading_style};
use shared::{TypographyState, ViewportWidth, render};
use zoon::*;

#[derive(Clone, Copy, Debug)]
enum PreviewBlock {
    Heading,
    Body,
}

impl PreviewBlock {
    fn tag(self) -> &'static str {
        match self {
            PreviewBlock::Heading => "h1",
            PreviewBlock::Body => "p",
        }
    }

    fn style(self, state: &TypographyState) -> BlockStyle {
        match self {
            PreviewBlock::Heading => heading_style(state),
            PreviewBlock::Body => body_style(state),
        }
    }

    fn text(self, state: &TypographyState) -> String {
        match self {
            PreviewBlock::Heading => state.heading_text().to_string(),
            PreviewBlock::Body => state.body_text().to_string(),
        }
    }
}

pub fn preview_panel(studio: &TypographyStudio) -> impl Element {
    let state = &studio.state;
    El::new()
        .s(Width::fill())
        .s(Align::new().center_x())
        .child(
            Column::new()
                .s(Align::new().center_x())
                .s(Background::new().color(SURFACE))
                .s(RoundedCorners::all(RADIUS_40))
                .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
                .s(Shadows::new([Shadow::new().y(25).blur(50).color("rgba(15, 23, 42, 0.15)")]))
                .s(Clip::both())
                .update_raw_el({
                    let width = state.signal_ref(|state| render(state).viewport);
                    move |raw_el| {
                        raw_el
                            .style("max-width", "100%")
                            .style("transition", "width 0.5s ease-in-out")
                            .style_signal("width", width.map(|width: ViewportWidth| width.to_string()))
                    }
                })
                .item_signal(
                    state
                        .signal_ref(|state| render(state).device_frame)
                        .map_true(device_status_bar),
                )
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Padding::all(SPACING_64))
                        .s(Gap::new().y(SPACING_32))
                        .update_raw_el(|raw_el| {
                            raw_el
                                .style("min-height", "600px")
                                .style("justify-content", "center")
                        })
                        .item(styled_block(state, PreviewBlock::Heading))
                        .item(styled_block(state, PreviewBlock::Body)),
                ),
        )
}

fn device_status_bar() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Height::exact(48))
        .s(Gap::new().x(6))
        .s(Background::new().color(SURFACE_MUTED))
        .s(Borders::new().bottom(Border::new().width(1).color(BORDER_COLOR)))
        .update_raw_el(|raw_el| {
            raw_el
                .style("justify-content", "center")
                .style("align-items", "center")
        })
        .item(
            El::new()
                .s(Width::exact(8))
                .s(Height::exact(8))
                .s(RoundedCorners::all_max())
                .s(Background::new().color("#cbd5e1")),
        )
        .item(
            El::new()
                .s(Width::exact(48))
                .s(Height::exact(6))
                .s(RoundedCorners::all_max())
                .s(Background::new().color("#cbd5e1")),
        )
}

/// Layout styles shared by both blocks. Text keeps the browser's default
/// `white-space`, so typed newlines collapse like in a plain `<p>`.
const BLOCK_BASE_STYLES: [(&str, &str); 3] = [
    ("margin", "0"),
    ("overflow-wrap", "anywhere"),
    ("transition", "all 0.5s"),
];

/// One preview element with a `style_signal` per declared property. The set
/// of properties per block does not depend on the state, only their values.
fn styled_block(state: &Actor<TypographyState>, block: PreviewBlock) -> impl Element {
    let properties = block.style(&TypographyState::default()).declarations();

    let mut element = RawHtmlEl::new(block.tag());
    for (property, value) in BLOCK_BASE_STYLES {
        element = element.style(property, value);
    }
    for property in properties.into_iter().map(|declaration| declaration.property) {
        element = element.style_signal(
            property,
            state.signal_ref(move |state| {
                block
                    .style(state)
                    .declarations()
                    .into_iter()
                    .find(|declaration| declaration.property == property)
                    .map(|declaration| declaration.value)
            }),
        );
    }
    if matches!(block, PreviewBlock::Heading) {
        // Fixed; only the body line height is adjustable and exported.
        element = element.style("line-height", "1.3");
    }

    element.child(Text::with_signal(state.signal_ref(move |state| block.text(state))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_styles_leave_typography_to_the_declarations() {
        let declared: Vec<&str> = [PreviewBlock::Heading, PreviewBlock::Body]
            .into_iter()
            .flat_map(|block| block.style(&TypographyState::default()).declarations())
            .map(|declaration| declaration.property)
            .collect();

        for (property, _) in BLOCK_BASE_STYLES {
            assert_ne!(property, "white-space");
            assert!(!declared.contains(&property), "{property} is set twice");
        }
    }
}
