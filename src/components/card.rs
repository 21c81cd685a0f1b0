use gpui::{
    AnyElement, App, Div, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use smallvec::SmallVec;

use crate::theme::{
    ThemeExt, ThemeLayerKind, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
    ThemeTextSizeKind,
};

/// A rounded surface with an optional header.
///
/// Children are laid out in a column below the header. Cards always sit on
/// the page, so their surface is the [`Card::LAYER`] above it.
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    description: Option<SharedString>,
    children: SmallVec<[AnyElement; 2]>,
    base: Div,
}

impl Card {
    pub const LAYER: ThemeLayerKind = ThemeLayerKind::Primary.nested();

    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            children: SmallVec::new(),
            base: div(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Secondary line under the title.
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn get_title(&self) -> Option<&SharedString> {
        self.title.as_ref()
    }

    fn has_header(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl Styled for Card {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let has_header = self.has_header();
        let colors = &cx.active_variant().colors;
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let border_color = colors.border;
        let background_color = Self::LAYER.resolve(cx);
        let corner_radius = ThemeLayoutCornerRadiiKind::Lg.resolve(cx);
        let padding = ThemeLayoutPaddingKind::Xl.resolve(cx);
        let gap = ThemeLayoutPaddingKind::Lg.resolve(cx);
        let title_size = ThemeTextSizeKind::Md.resolve(cx);
        let title_weight = ThemeTextSizeKind::Md.weight(cx);
        let description_size = ThemeTextSizeKind::Body.resolve(cx);

        self.base
            .relative()
            .flex()
            .flex_col()
            .gap(gap)
            .p(padding)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border_color),
            )
            .when(has_header, |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(4.))
                        .when_some(self.title, |this, title| {
                            this.child(
                                div()
                                    .text_size(title_size)
                                    .font_weight(title_weight)
                                    .text_color(primary_text_color)
                                    .child(title),
                            )
                        })
                        .when_some(self.description, |this, description| {
                            this.child(
                                div()
                                    .text_size(description_size)
                                    .text_color(secondary_text_color)
                                    .child(description),
                            )
                        }),
                )
            })
            .children(self.children)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    use crate::theme::Theme;

    #[test]
    fn test_card_header_detection() {
        assert!(!Card::new().has_header());
        assert!(Card::new().title("Projets").has_header());
        assert!(Card::new().description("Quelques réalisations").has_header());
    }

    #[test]
    fn test_card_collects_children() {
        let card = Card::new()
            .child(div())
            .children([div(), div()]);

        assert_eq!(card.children.len(), 3);
    }

    #[test]
    fn test_cards_sit_one_layer_above_the_page() {
        assert_eq!(Card::LAYER, ThemeLayerKind::Secondary);
    }

    #[gpui::test]
    fn test_card_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| CardTestView))
                .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct CardTestView;

    impl gpui::Render for CardTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Card::new()
                    .title("Compétences")
                    .description("Niveau de maîtrise")
                    .w_full()
                    .child("contenu"),
            )
        }
    }
}
