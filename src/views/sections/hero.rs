use gpui::{
    App, Div, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px, relative,
};
use gpui_portfolio_content::{Content, Counter, Highlight, IconName, Profile, contact::mailto_href};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::{Avatar, Badge, Button, ButtonVariant, Card, Icon, Separator},
    theme::{ThemeExt, ThemeTextSizeKind},
    views::sections::{NavigateHandler, Section, grid_rows, page_column},
};

/// Toolbox tiles per row on the profile card.
const TOOLBOX_COLUMNS: usize = 2;

/// Target of the "Me contacter" button.
pub fn contact_href(profile: &Profile) -> String {
    mailto_href(&profile.email)
}

/// One card per counter, in order.
pub fn counter_cards(counters: &[Counter], cx: &App) -> Vec<Card> {
    let value_size = ThemeTextSizeKind::Lg.resolve(cx);
    let value_weight = ThemeTextSizeKind::Display.weight(cx);
    let label_size = ThemeTextSizeKind::Caption.resolve(cx);
    let secondary_text_color = cx.active_variant().colors.text.secondary;

    counters
        .iter()
        .map(|counter| {
            Card::new().flex_1().items_center().child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(
                        div()
                            .text_size(value_size)
                            .font_weight(value_weight)
                            .child(counter.value.clone()),
                    )
                    .child(
                        div()
                            .text_size(label_size)
                            .text_color(secondary_text_color)
                            .text_center()
                            .child(counter.label),
                    ),
            )
        })
        .collect()
}

/// Icon and label pairs laid out inline, in order.
pub fn fact_items(facts: &[Highlight], cx: &App) -> Vec<Div> {
    let accent_color = cx.active_variant().colors.accent.primary;

    facts
        .iter()
        .map(|fact| {
            div()
                .flex()
                .items_center()
                .gap(px(8.))
                .child(Icon::named(fact.icon).color(accent_color))
                .child(fact.label.clone())
        })
        .collect()
}

/// Bordered tiles for the toolbox grid, in order.
pub fn toolbox_tiles(toolbox: &[Highlight], cx: &App) -> Vec<Div> {
    let colors = &cx.active_variant().colors;
    let accent_color = colors.accent.primary;
    let border_color = colors.border;
    let corner_radius = cx.get_theme().layout.corner_radii.md;
    let padding = cx.get_theme().layout.padding.md;

    toolbox
        .iter()
        .map(|tool| {
            div()
                .relative()
                .flex_1()
                .flex()
                .items_center()
                .gap(px(8.))
                .p(padding)
                .child(
                    squircle()
                        .absolute_expand()
                        .rounded(corner_radius)
                        .border(px(1.))
                        .border_inside()
                        .border_color(border_color),
                )
                .child(Icon::named(tool.icon).color(accent_color))
                .child(tool.label.clone())
        })
        .collect()
}

/// Availability, title, calls to action, counters and the profile card.
#[derive(IntoElement)]
pub struct Hero {
    content: &'static Content,
    navigate: NavigateHandler,
}

impl Hero {
    pub fn new(content: &'static Content, navigate: NavigateHandler) -> Self {
        Self { content, navigate }
    }

    fn profile_card(&self, cx: &App) -> Card {
        let profile = &self.content.profile;
        let secondary_text_color = cx.active_variant().colors.text.secondary;
        let name_size = ThemeTextSizeKind::Md.resolve(cx);
        let name_weight = ThemeTextSizeKind::Md.weight(cx);
        let gap = cx.get_theme().layout.padding.md;

        let rows = grid_rows(toolbox_tiles(&self.content.toolbox, cx), TOOLBOX_COLUMNS, gap);

        Card::new()
            .flex_1()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(16.))
                    .child(Avatar::new(profile.avatar.clone(), profile.initials()).size(px(64.)))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_size(name_size)
                                    .font_weight(name_weight)
                                    .child(profile.name.clone()),
                            )
                            .child(
                                div()
                                    .text_color(secondary_text_color)
                                    .child(profile.location.clone()),
                            ),
                    ),
            )
            .child(Separator::horizontal())
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(gap)
                    .children(fact_items(&self.content.facts, cx)),
            )
            .child(Separator::horizontal())
            .child(div().flex().flex_col().gap(gap).children(rows))
    }
}

impl RenderOnce for Hero {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let profile = &self.content.profile;
        let secondary_text_color = cx.active_variant().colors.text.secondary;
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.lg;
        let section_gap = layout.page.section_gap;
        let title_size = ThemeTextSizeKind::Display.resolve(cx);
        let title_weight = ThemeTextSizeKind::Display.weight(cx);
        let navigate = self.navigate.clone();
        let profile_card = self.profile_card(cx);

        page_column(cx).py(section_gap).child(
            div()
                .w_full()
                .flex()
                .items_center()
                .gap(section_gap)
                .child(
                    div()
                        .w(relative(0.55))
                        .flex()
                        .flex_col()
                        .gap(gap)
                        .child(
                            div().flex().child(
                                Badge::new(self.content.availability.clone()).icon(IconName::Rocket),
                            ),
                        )
                        .child(
                            div()
                                .text_size(title_size)
                                .font_weight(title_weight)
                                .child(profile.title.clone()),
                        )
                        .child(
                            div()
                                .text_color(secondary_text_color)
                                .child(profile.summary.clone()),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_wrap()
                                .gap(px(12.))
                                .child(
                                    Button::new("hero:projects")
                                        .text("Voir mes projets")
                                        .trailing_icon(IconName::ChevronRight)
                                        .on_click(move |_event, window, cx| {
                                            (navigate)(&Section::Projects, window, cx)
                                        }),
                                )
                                .child(
                                    Button::new("hero:contact")
                                        .text("Me contacter")
                                        .icon(IconName::Mail)
                                        .variant(ButtonVariant::Outline)
                                        .href(contact_href(profile)),
                                )
                                .child(
                                    Button::new("hero:github")
                                        .text("GitHub")
                                        .icon(IconName::Github)
                                        .variant(ButtonVariant::Ghost)
                                        .href(profile.github.clone()),
                                )
                                .child(
                                    Button::new("hero:linkedin")
                                        .text("LinkedIn")
                                        .icon(IconName::Linkedin)
                                        .variant(ButtonVariant::Ghost)
                                        .href(profile.linkedin.clone()),
                                ),
                        )
                        .child(
                            div()
                                .flex()
                                .gap(px(16.))
                                .max_w(px(448.))
                                .children(counter_cards(&profile.counters(), cx)),
                        ),
                )
                .child(profile_card),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_button_is_bare_mailto() {
        assert_eq!(
            contact_href(&Content::builtin().profile),
            "mailto:lyamtorres@hotmail.com"
        );
    }

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use super::super::*;
        use gpui::TestAppContext;

        use crate::theme::Theme;

        #[gpui::test]
        fn test_hero_lists_match_content(cx: &mut TestAppContext) {
            cx.update(|cx| {
                cx.set_theme(Theme::builtin());
                let content = Content::builtin();

                assert_eq!(counter_cards(&content.profile.counters(), cx).len(), 3);
                assert_eq!(fact_items(&content.facts, cx).len(), content.facts.len());
                assert_eq!(toolbox_tiles(&content.toolbox, cx).len(), content.toolbox.len());
            });
        }
    }
}
