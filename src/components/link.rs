use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_portfolio_content::IconName;

use crate::{
    components::Icon,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::ElementIdExt,
};

/// Inline text that opens a URL when clicked.
///
/// The target is handed to the OS unchanged.
#[derive(IntoElement)]
pub struct Link {
    id: ElementId,
    text: SharedString,
    url: SharedString,
    icon: Option<IconName>,
}

impl Link {
    pub fn new(
        id: impl Into<ElementId>,
        text: impl Into<SharedString>,
        url: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            url: url.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl RenderOnce for Link {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let accent_color = colors.accent.primary;
        let text_size = ThemeTextSizeKind::Body.resolve(cx);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let text_color = if is_hover { accent_color } else { primary_text_color };
        let url = self.url;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap(px(8.))
            .cursor(CursorStyle::PointingHand)
            .text_size(text_size)
            .text_color(text_color)
            .when_some(self.icon, |this, icon| {
                this.child(Icon::named(icon).color(secondary_text_color))
            })
            .child(div().when(is_hover, |this| this.underline()).child(self.text))
            .on_hover(move |hover, _window, cx| {
                is_hover_state.update(cx, |this, cx| {
                    *this = *hover;
                    cx.notify();
                });
            })
            .on_click(move |_event, _window, cx| {
                tracing::debug!(url = %url, "opening link");
                cx.open_url(&url);
            })
    }
}
