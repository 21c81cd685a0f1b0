use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, px};

use crate::theme::ThemeExt;

/// A one pixel horizontal rule in the border color.
#[derive(IntoElement, Default)]
pub struct Separator;

impl Separator {
    pub fn horizontal() -> Self {
        Self
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .flex_none()
            .h(px(1.))
            .w_full()
            .bg(cx.active_variant().colors.border)
    }
}
