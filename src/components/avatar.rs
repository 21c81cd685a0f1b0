use gpui::{
    App, InteractiveElement, IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, SharedString, Styled,
    StyledImage, Window, div, img, px,
};

use crate::theme::{ThemeExt, ThemeTextSizeKind};

const DEFAULT_SIZE: Pixels = px(80.);

/// A round portrait that shows initials when the image can't be loaded.
#[derive(IntoElement)]
pub struct Avatar {
    source: SharedString,
    fallback: SharedString,
    size: Pixels,
}

impl Avatar {
    /// `source` is an asset path or URL; `fallback` is drawn when it doesn't resolve.
    pub fn new(source: impl Into<SharedString>, fallback: impl Into<SharedString>) -> Self {
        Self {
            source: source.into(),
            fallback: fallback.into(),
            size: DEFAULT_SIZE,
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let fallback_bg = colors.background.tertiary;
        let fallback_text_color = colors.accent.primary;
        let border_color = colors.border;
        let text_size = ThemeTextSizeKind::Md.resolve(cx);
        let text_weight = ThemeTextSizeKind::Md.weight(cx);
        let size = self.size;
        let fallback = self.fallback;

        div()
            .flex_none()
            .size(size)
            .rounded_full()
            .overflow_hidden()
            .border_1()
            .border_color(border_color)
            .child(
                img(self.source)
                    .size(size)
                    .object_fit(ObjectFit::Cover)
                    .with_fallback(move || {
                        let label = fallback.clone();

                        div()
                            .debug_selector(move || format!("avatar-fallback:{label}"))
                            .size(size)
                            .flex()
                            .items_center()
                            .justify_center()
                            .bg(fallback_bg)
                            .text_size(text_size)
                            .font_weight(text_weight)
                            .text_color(fallback_text_color)
                            .child(fallback.clone())
                            .into_any_element()
                    }),
            )
    }
}
