use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_portfolio_content::{Content, IconName, chart::skill_bars};

use crate::{
    components::{Badge, BarChart, Card, SectionTitle},
    state::MountGate,
    theme::ThemeExt,
    views::sections::page_column,
};

/// One badge per key strength, in order.
pub fn strength_badges(strengths: &[String]) -> Vec<Badge> {
    strengths
        .iter()
        .map(|strength| Badge::new(strength.clone()))
        .collect()
}

/// Key strengths next to the skills chart.
#[derive(IntoElement)]
pub struct SkillsSection {
    content: &'static Content,
    mount: MountGate,
}

impl SkillsSection {
    pub fn new(content: &'static Content, mount: MountGate) -> Self {
        Self { content, mount }
    }
}

impl RenderOnce for SkillsSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.xl;
        let section_gap = layout.page.section_gap;

        page_column(cx)
            .py(section_gap / 2.)
            .flex()
            .flex_col()
            .gap(gap)
            .child(SectionTitle::new(IconName::Terminal, "Compétences").subtitle("Technos & maîtrise"))
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap(gap)
                    .child(
                        Card::new().flex_1().title("Forces clés").child(
                            div()
                                .flex()
                                .flex_wrap()
                                .gap(px(8.))
                                .children(strength_badges(&self.content.strengths)),
                        ),
                    )
                    .child(
                        Card::new().flex_1().title("Niveau par compétence").child(
                            BarChart::new("skills:chart", skill_bars(&self.content.skills))
                                .mounted(self.mount.is_mounted()),
                        ),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::SharedString;

    #[test]
    fn test_one_badge_per_strength_in_order() {
        let strengths = &Content::builtin().strengths;
        let badges = strength_badges(strengths);

        assert_eq!(badges.len(), strengths.len());
        for (badge, strength) in badges.iter().zip(strengths) {
            assert_eq!(badge.label(), &SharedString::from(strength.clone()));
        }
    }
}
