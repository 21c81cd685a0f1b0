use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_portfolio_content::IconName;
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::Icon,
    theme::{ThemeBackgroundKind, ThemeExt, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

/// A small pill-shaped label on a tertiary fill.
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    icon: Option<IconName>,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    #[cfg(test)]
    pub(crate) fn label(&self) -> &SharedString {
        &self.label
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let bg_color = ThemeBackgroundKind::Tertiary.resolve(cx);
        let text_color = cx.active_variant().colors.text.primary;
        let text_size = ThemeTextSizeKind::Caption.resolve(cx);
        let text_weight = ThemeTextSizeKind::Caption.weight(cx);
        let padding = ThemeLayoutPaddingKind::Sm.resolve(cx);

        div()
            .relative()
            .flex()
            .flex_none()
            .items_center()
            .gap(px(4.))
            .px(padding * 2.)
            .py(padding / 2.)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(px(999.))
                    .bg(bg_color),
            )
            .when_some(self.icon, |this, icon| {
                this.child(Icon::named(icon).size(px(12.)).color(text_color))
            })
            .child(
                div()
                    .text_size(text_size)
                    .font_weight(text_weight)
                    .text_color(text_color)
                    .whitespace_nowrap()
                    .child(self.label),
            )
    }
}
