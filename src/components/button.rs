use std::time::Duration;

use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, Length,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::FluentBuilder, px, relative,
};
use gpui_portfolio_content::IconName;
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    components::Icon,
    conditional_transition,
    primitives::FocusRing,
    theme::ThemeExt,
    utils::{ElementIdExt, PixelsExt, RgbaExt, SquircleExt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the accent color.
    #[default]
    Primary,
    /// Transparent with a border.
    Outline,
    /// Transparent until hovered.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

/// Colors a variant resolves to for the active theme.
#[derive(Clone)]
struct ButtonColors {
    bg: Rgba,
    bg_hover: Rgba,
    bg_active: Rgba,
    border: Rgba,
    text: Rgba,
    highlight_alpha: f32,
}

impl ButtonVariant {
    fn colors(&self, cx: &App) -> ButtonColors {
        const HOVER_STRENGTH: f32 = 0.12;
        const ACTIVE_STRENGTH: f32 = 0.25;

        let colors = &cx.active_variant().colors;
        let page = colors.background.primary;
        let text = colors.text.primary;

        match self {
            ButtonVariant::Primary => ButtonColors {
                bg: colors.accent.primary,
                bg_hover: colors.accent.primary.lerp(&page, HOVER_STRENGTH),
                bg_active: colors.accent.primary.lerp(&page, ACTIVE_STRENGTH),
                border: colors.accent.primary,
                text: colors.accent.on_primary,
                highlight_alpha: 0.2,
            },

            ButtonVariant::Outline => ButtonColors {
                bg: page.alpha(0.),
                bg_hover: colors.background.tertiary,
                bg_active: colors.background.quaternary,
                border: colors.border,
                text,
                highlight_alpha: 0.,
            },

            ButtonVariant::Ghost => ButtonColors {
                bg: page.alpha(0.),
                bg_hover: colors.background.tertiary,
                bg_active: colors.background.quaternary,
                border: page.alpha(0.),
                text,
                highlight_alpha: 0.,
            },
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    variant: ButtonVariant,
    size: ButtonSize,
    width: Length,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            trailing_icon: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            width: Length::Auto,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Icon drawn before the text.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Icon drawn after the text.
    pub fn trailing_icon(mut self, icon: IconName) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretches the button across its container.
    pub fn w_full(mut self) -> Self {
        self.width = relative(1.).into();
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Opens `url` with the system handler when clicked.
    pub fn href(self, url: impl Into<SharedString>) -> Self {
        let url = url.into();
        self.on_click(move |_event, _window, cx| {
            tracing::debug!(url = %url, "opening link");
            cx.open_url(&url);
        })
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.variant.colors(cx);
        let theme = cx.get_theme();
        let font_family = theme.layout.text.default_font.family[0].clone();
        let line_height = theme.layout.text.default_font.line_height;
        let corner_radius = theme.layout.corner_radii.md;
        let (height, text_size, horizontal_padding) = match self.size {
            ButtonSize::Sm => (
                theme.layout.size.md,
                theme.layout.text.default_font.sizes.caption,
                theme.layout.padding.md,
            ),
            ButtonSize::Md => (
                theme.layout.size.lg,
                theme.layout.text.default_font.sizes.body,
                theme.layout.padding.lg,
            ),
        };
        let vertical_padding = height.padding_needed_for_height(window, text_size, line_height);
        let icon_only = self.text.is_none();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let bg_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_click_down => colors.bg_active,
                is_hover || is_focus => colors.bg_hover,
                _ => colors.bg
            }
        );

        div()
            .id(self.id.clone())
            .relative()
            .cursor(CursorStyle::PointingHand)
            .w(self.width)
            .h(height)
            .min_h(height)
            .when(icon_only, |this| this.w(height).min_w(height))
            .py(vertical_padding)
            .when(!icon_only, |this| this.px(horizontal_padding))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .gap(px(8.))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(*bg_color_transition.evaluate(window, cx))
                    .border(px(1.))
                    .border_inside()
                    .map(|this| {
                        if colors.highlight_alpha > 0. {
                            this.border_highlight(colors.text, colors.highlight_alpha)
                        } else {
                            this.border_color(colors.border)
                        }
                    }),
            )
            .when_some(self.icon, |this, icon| {
                this.child(Icon::named(icon).color(colors.text))
            })
            .when_some(self.text, |this, text| {
                this.child(
                    div()
                        .min_w_0()
                        .font_family(font_family)
                        .text_size(text_size)
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(colors.text)
                        .text_ellipsis()
                        .child(text),
                )
            })
            .when_some(self.trailing_icon, |this, icon| {
                this.child(Icon::named(icon).size(px(14.)).color(colors.text))
            })
            .map(|this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();
                let on_click = self.on_click;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Keeps the focus ring hidden for mouse clicks.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, cx| {
                        *this = true;
                        cx.notify();
                    });
                })
                .on_click(move |event, window, cx| {
                    is_click_down_state_on_click.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });

                    if let Some(on_click) = on_click.as_ref() {
                        (on_click)(event, window, cx);
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // Pressed inside, released outside.
                    is_hover_state.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });

                    is_click_down_state.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    use crate::theme::{ActiveVariantId, Theme};

    #[test]
    fn test_button_defaults() {
        let button = Button::new("button");

        assert!(button.text.is_none());
        assert!(button.icon.is_none());
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Md);
        assert!(matches!(button.width, Length::Auto));
        assert!(button.on_click.is_none());
    }

    #[test]
    fn test_w_full_fills_container() {
        let button = Button::new("submit").w_full();

        assert!(matches!(
            button.width,
            Length::Definite(gpui::DefiniteLength::Fraction(fraction)) if fraction == 1.
        ));
    }

    #[test]
    fn test_href_installs_click_handler() {
        let button = Button::new("cv").text("CV").href("/cv.pdf");
        assert!(button.on_click.is_some());
    }

    #[gpui::test]
    fn test_variant_colors_follow_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());

            cx.set_global(ActiveVariantId(0));
            let dark = ButtonVariant::Outline.colors(cx);
            cx.set_global(ActiveVariantId(1));
            let light = ButtonVariant::Outline.colors(cx);

            assert_ne!(dark.text, light.text);
            assert_eq!(
                ButtonVariant::Primary.colors(cx).bg,
                cx.active_variant().colors.accent.primary
            );
            assert_eq!(ButtonVariant::Ghost.colors(cx).bg.a, 0.);
        });
    }

    #[gpui::test]
    fn test_button_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ButtonTestView))
                .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .flex()
                .gap(px(8.))
                .child(Button::new("primary").text("Voir mes projets").trailing_icon(IconName::ChevronRight))
                .child(Button::new("outline").text("Me contacter").icon(IconName::Mail).variant(ButtonVariant::Outline))
                .child(Button::new("ghost").icon(IconName::Sun).variant(ButtonVariant::Ghost))
                .child(Button::new("small").text("Code").size(ButtonSize::Sm))
        }
    }
}
