use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_portfolio_content::{Experience, IconName};

use crate::{
    components::{Card, SectionTitle},
    theme::{ThemeExt, ThemeTextSizeKind},
    views::sections::{grid_rows, page_column},
};

const COLUMNS: usize = 3;

/// One card per position, in order.
pub fn experience_cards(experience: &[Experience], cx: &App) -> Vec<Card> {
    let secondary_text_color = cx.active_variant().colors.text.secondary;
    let accent_color = cx.active_variant().colors.accent.primary;
    let caption_size = ThemeTextSizeKind::Caption.resolve(cx);

    experience
        .iter()
        .map(|entry| {
            Card::new()
                .flex_1()
                .title(entry.role.clone())
                .description(entry.subtitle())
                .child(
                    div()
                        .text_size(caption_size)
                        .text_color(secondary_text_color)
                        .child(entry.period.clone()),
                )
                .child(div().flex().flex_col().gap(px(8.)).children(
                    entry.points.iter().map(|point| {
                        div()
                            .flex()
                            .gap(px(8.))
                            .child(div().flex_none().text_color(accent_color).child("•"))
                            .child(div().flex_1().child(point.clone()))
                    }),
                ))
        })
        .collect()
}

/// The experience timeline.
#[derive(IntoElement)]
pub struct ExperienceSection {
    experience: &'static [Experience],
}

impl ExperienceSection {
    pub fn new(experience: &'static [Experience]) -> Self {
        Self { experience }
    }
}

impl RenderOnce for ExperienceSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.xl;
        let section_gap = layout.page.section_gap;

        page_column(cx)
            .py(section_gap / 2.)
            .flex()
            .flex_col()
            .gap(gap)
            .child(SectionTitle::new(IconName::Briefcase, "Expérience").subtitle("Ce que j'ai accompli"))
            .children(grid_rows(experience_cards(self.experience, cx), COLUMNS, gap))
    }
}
