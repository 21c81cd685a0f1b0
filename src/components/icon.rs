use gpui::{Hsla, IntoElement, Pixels, RenderOnce, SharedString, Styled, prelude::FluentBuilder, px, svg};
use gpui_portfolio_content::IconName;

use crate::theme::ThemeExt;

const DEFAULT_SIZE: Pixels = px(16.);

/// An SVG icon tinted with a single color.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Pixels,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates an icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: DEFAULT_SIZE,
            color: None,
        }
    }

    /// Creates an icon from the bundled set.
    pub fn named(name: IconName) -> Self {
        Self::new(name.asset_path())
    }

    /// Sets uniform width and height.
    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Tints the icon with the theme accent.
    pub fn accent(mut self, cx: &gpui::App) -> Self {
        self.color = Some(cx.active_variant().colors.accent.primary.into());
        self
    }
}

impl From<IconName> for Icon {
    fn from(name: IconName) -> Self {
        Icon::named(name)
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.active_variant().colors.text.primary;

        svg()
            .path(self.path)
            .flex_none()
            .size(self.size)
            .min_w(self.size)
            .min_h(self.size)
            .text_color(primary_text_color)
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, ParentElement, TestAppContext, VisualTestContext, hsla};

    use crate::theme::Theme;

    #[test]
    fn test_named_icon_uses_asset_path() {
        let icon = Icon::named(IconName::GitBranch);
        assert_eq!(icon.path, SharedString::from("icons/git_branch.svg"));
        assert_eq!(icon.size, DEFAULT_SIZE);
        assert!(icon.color.is_none());
    }

    #[test]
    fn test_icon_builder_chain() {
        let icon = Icon::from(IconName::Sun)
            .size(px(24.))
            .color(hsla(0.5, 0.5, 0.5, 1.0));

        assert_eq!(icon.size, px(24.));
        assert!(icon.color.is_some());
    }

    #[gpui::test]
    fn test_accent_reads_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());

            let icon = Icon::named(IconName::Code).accent(cx);
            let accent: Hsla = cx.active_variant().colors.accent.primary.into();
            assert_eq!(icon.color, Some(accent));
        });
    }

    #[gpui::test]
    fn test_icon_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::builtin());

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            gpui::div()
                .size_full()
                .children(IconName::ALL.map(|name| Icon::named(name).size(px(24.))))
        }
    }
}
