use std::time::Duration;

use gpui::{
    App, ElementId, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, div,
    prelude::FluentBuilder, px,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    components::Card,
    conditional_transition,
    primitives::FocusRing,
    theme::{ThemeExt, ThemeLayerKind, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind},
    utils::{ElementIdExt, PixelsExt, RgbaExt},
};

/// Visible lines of a multi-line field.
const MULTILINE_ROWS: f32 = 5.;

/// Fields are drawn inside cards.
const FIELD_LAYER: ThemeLayerKind = Card::LAYER.nested();

/// A themed text input over a shared [`InputState`].
///
/// The state entity is owned by the caller so values survive re-renders.
#[derive(IntoElement)]
pub struct TextField {
    id: ElementId,
    invalid: bool,
    multiline: bool,
    base: PrimitiveInput,
}

impl TextField {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        let id = id.into();
        Self {
            id: id.clone(),
            invalid: false,
            multiline: false,
            base: PrimitiveInput::new(id, state),
        }
    }

    pub fn placeholder(mut self, text: impl Into<SharedString>) -> Self {
        self.base = self.base.placeholder(text);
        self
    }

    /// Draws the field in the destructive color.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Accepts line breaks and shows several rows.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self.base = self.base.multiline();
        self
    }

}

impl RenderOnce for TextField {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let background_color = FIELD_LAYER.resolve(cx);
        let background_hover_color = FIELD_LAYER.next().resolve(cx);
        let border_color = colors.border;
        let border_hover_color = border_color.lerp(&primary_text_color, 0.1);
        let theme = cx.get_theme();
        let font_family = theme.layout.text.default_font.family[0].clone();
        let line_height = theme.layout.text.default_font.line_height;
        let text_size = theme.layout.text.default_font.sizes.body;
        let corner_radius = ThemeLayoutCornerRadiiKind::Md.resolve(cx);
        let horizontal_padding = ThemeLayoutPaddingKind::Md.resolve(cx);
        let single_line_height = theme.layout.size.lg;
        let vertical_padding =
            single_line_height.padding_needed_for_height(window, text_size, line_height);
        let row_height = single_line_height - vertical_padding * 2.;

        let is_invalid = self.invalid;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let focus_handle = self.focus_handle(cx);
        let is_focus = focus_handle.is_focused(window);

        let border_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(400),
            {
                is_invalid => colors.accent.destructive,
                is_focus => colors.accent.primary,
                is_hover => border_hover_color,
                _ => border_color
            }
        );

        div()
            .id(self.id.clone())
            .relative()
            .w_full()
            .px(horizontal_padding)
            .py(vertical_padding)
            .when(self.multiline, |this| {
                this.min_h(row_height * MULTILINE_ROWS + vertical_padding * 2.)
            })
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle)
                    .color(if is_invalid {
                        colors.accent.destructive
                    } else {
                        colors.accent.primary
                    })
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(if is_hover && !is_focus {
                        background_hover_color
                    } else {
                        background_color
                    })
                    .border(px(1.))
                    .border_inside()
                    .border_color(*border_color_transition.evaluate(window, cx)),
            )
            .child(
                self.base
                    .w_full()
                    .text_size(text_size)
                    .font_family(font_family)
                    .text_color(primary_text_color)
                    .placeholder_text_color(secondary_text_color)
                    .selection_color(colors.accent.primary.alpha(0.3))
                    .line_height(line_height),
            )
            .on_hover(move |hover, _window, cx| {
                is_hover_state.update(cx, |this, cx| {
                    *this = *hover;
                    cx.notify();
                });
            })
    }
}

impl Focusable for TextField {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.base.focus_handle(cx)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    use crate::theme::Theme;

    #[gpui::test]
    fn test_text_field_defaults(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx));

        cx.update(|_cx| {
            let field = TextField::new("name", state);
            assert!(!field.invalid);
            assert!(!field.multiline);
        });
    }

    #[gpui::test]
    fn test_text_field_builder(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx));

        cx.update(|_cx| {
            let field = TextField::new("message", state)
                .placeholder("Votre message")
                .multiline()
                .invalid(true);

            assert!(field.invalid);
            assert!(field.multiline);
            assert_eq!(field.base.get_placeholder(), &SharedString::from("Votre message"));
        });
    }

    #[test]
    fn test_fields_sit_inside_cards() {
        assert_eq!(FIELD_LAYER, ThemeLayerKind::Tertiary);
        assert_eq!(FIELD_LAYER.next(), crate::theme::ThemeBackgroundKind::Quaternary);
    }

    #[gpui::test]
    fn test_text_field_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            crate::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|cx| TextFieldTestView {
                    state: cx.new(|cx| InputState::new(cx)),
                })
            })
            .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct TextFieldTestView {
        state: Entity<InputState>,
    }

    impl gpui::Render for TextFieldTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(TextField::new("field", self.state.clone()).placeholder("Votre nom"))
        }
    }
}
