use gpui::{App, ElementId, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_portfolio_content::{IconName, Project};

use crate::{
    ElementIdExt,
    components::{Badge, Button, ButtonSize, ButtonVariant, Card, SectionTitle},
    theme::ThemeExt,
    views::sections::{grid_rows, page_column},
};

const COLUMNS: usize = 3;

/// One card per project, in order.
pub fn project_cards(projects: &[Project]) -> Vec<Card> {
    let base_id = ElementId::from("projects");

    projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let id = base_id.with_index(idx);

            Card::new()
                .flex_1()
                .title(project.title.clone())
                .description(project.description.clone())
                .child(
                    div()
                        .flex()
                        .flex_wrap()
                        .gap(px(6.))
                        .children(project.stack.iter().map(|tag| Badge::new(tag.clone()))),
                )
                .child(
                    div()
                        .mt_auto()
                        .flex()
                        .gap(px(8.))
                        .child(
                            Button::new(id.with_suffix("repo"))
                                .text("Code")
                                .icon(IconName::Github)
                                .variant(ButtonVariant::Outline)
                                .size(ButtonSize::Sm)
                                .href(project.links.repo.clone()),
                        )
                        .child(
                            Button::new(id.with_suffix("live"))
                                .text("Live")
                                .trailing_icon(IconName::ExternalLink)
                                .size(ButtonSize::Sm)
                                .href(project.links.live.clone()),
                        ),
                )
        })
        .collect()
}

/// The projects gallery.
#[derive(IntoElement)]
pub struct ProjectsSection {
    projects: &'static [Project],
}

impl ProjectsSection {
    pub fn new(projects: &'static [Project]) -> Self {
        Self { projects }
    }
}

impl RenderOnce for ProjectsSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.xl;
        let section_gap = layout.page.section_gap;

        page_column(cx)
            .py(section_gap / 2.)
            .flex()
            .flex_col()
            .gap(gap)
            .child(
                SectionTitle::new(IconName::Code, "Projets sélectionnés")
                    .subtitle("Un aperçu de ce que je construis"),
            )
            .children(grid_rows(project_cards(self.projects), COLUMNS, gap))
    }
}
