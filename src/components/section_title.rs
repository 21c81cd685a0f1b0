use gpui::{
    App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_portfolio_content::IconName;
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::{Icon, Separator},
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::RgbaExt,
};

/// Heading of a page section: an accent icon tile, a title, an optional
/// subtitle and a rule running to the right edge.
#[derive(IntoElement)]
pub struct SectionTitle {
    icon: IconName,
    title: SharedString,
    subtitle: Option<SharedString>,
}

impl SectionTitle {
    pub fn new(icon: IconName, title: impl Into<SharedString>) -> Self {
        Self {
            icon,
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl RenderOnce for SectionTitle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let accent_color = colors.accent.primary;
        let tile_size = cx.get_theme().layout.size.lg;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let title_size = ThemeTextSizeKind::Lg.resolve(cx);
        let title_weight = ThemeTextSizeKind::Lg.weight(cx);
        let subtitle_size = ThemeTextSizeKind::Body.resolve(cx);

        let heading = div()
            .flex()
            .flex_none()
            .items_center()
            .gap(px(12.))
            .child(
                div()
                    .relative()
                    .flex_none()
                    .size(tile_size)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(corner_radius)
                            .bg(accent_color.alpha(0.12)),
                    )
                    .child(Icon::named(self.icon).size(px(18.)).color(accent_color)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(title_size)
                            .font_weight(title_weight)
                            .text_color(primary_text_color)
                            .child(self.title),
                    )
                    .when_some(self.subtitle, |this, subtitle| {
                        this.child(
                            div()
                                .text_size(subtitle_size)
                                .text_color(secondary_text_color)
                                .child(subtitle),
                        )
                    }),
            );

        div()
            .w_full()
            .flex()
            .items_end()
            .justify_between()
            .gap(px(16.))
            .child(heading)
            .child(
                div()
                    .flex_1()
                    .ml(px(24.))
                    .mb(px(8.))
                    .debug_selector(|| "section-title-rule".into())
                    .child(Separator::horizontal()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use super::super::*;
        use gpui::{AppContext, TestAppContext, VisualTestContext};

        use crate::theme::Theme;

        #[gpui::test]
        fn test_title_ends_with_a_rule(cx: &mut TestAppContext) {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::builtin());
                cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| TitleTestView))
                    .unwrap()
            });

            let cx = &mut VisualTestContext::from_window(window.into(), cx);
            cx.run_until_parked();

            let rule = cx
                .debug_bounds("section-title-rule")
                .expect("the rule should be laid out");
            assert!(rule.size.width > px(0.));
        }

        struct TitleTestView;

        impl gpui::Render for TitleTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div()
                    .w(px(800.))
                    .child(SectionTitle::new(IconName::Briefcase, "Expérience").subtitle("Parcours"))
            }
        }
    }

    #[test]
    fn test_section_title_builder() {
        let title = SectionTitle::new(IconName::Rocket, "Projets sélectionnés")
            .subtitle("Un aperçu de ce que je construis");

        assert_eq!(title.icon, IconName::Rocket);
        assert_eq!(title.title, SharedString::from("Projets sélectionnés"));
        assert_eq!(
            title.subtitle,
            Some(SharedString::from("Un aperçu de ce que je construis"))
        );
    }

    #[test]
    fn test_subtitle_is_optional() {
        assert!(SectionTitle::new(IconName::Briefcase, "Expérience").subtitle.is_none());
    }
}
