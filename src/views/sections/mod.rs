//! The blocks of the page, top to bottom.
//!
//! Every list a section shows is built by a plain function over the content
//! slice so the order and count can be checked without a window.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{App, Div, IntoElement, ParentElement, Pixels, Styled, Window, div};

use crate::theme::ThemeExt;

mod navbar;
pub use navbar::*;

mod hero;
pub use hero::*;

mod projects;
pub use projects::*;

mod skills;
pub use skills::*;

mod experience;
pub use experience::*;

mod recognition;
pub use recognition::*;

mod contact;
pub use contact::*;

mod footer;
pub use footer::*;

/// Scroll targets, in the order they are laid out in the scroll area.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn nav_label(&self) -> Option<&'static str>)]
pub enum Section {
    #[assoc(nav_label = None)]
    Hero,
    #[assoc(nav_label = Some("Projets"))]
    Projects,
    #[assoc(nav_label = Some("Compétences"))]
    Skills,
    #[assoc(nav_label = Some("Expérience"))]
    Experience,
    #[assoc(nav_label = None)]
    Recognition,
    #[assoc(nav_label = Some("Contact"))]
    Contact,
    #[assoc(nav_label = None)]
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Recognition,
        Section::Contact,
        Section::Footer,
    ];

    /// Position of the section among the scroll area's children.
    pub fn scroll_index(&self) -> usize {
        *self as usize
    }

    /// Sections linked from the navbar, in display order.
    pub fn nav_links() -> impl Iterator<Item = (Section, &'static str)> {
        Section::ALL
            .into_iter()
            .filter_map(|section| section.nav_label().map(|label| (section, label)))
    }
}

/// Called with the section a link or button should scroll to.
pub type NavigateHandler = Rc<dyn Fn(&Section, &mut Window, &mut App) + 'static>;

/// Centers a section's content at the theme's page width.
pub(crate) fn page_column(cx: &App) -> Div {
    let layout = &cx.get_theme().layout;

    div()
        .w_full()
        .max_w(layout.page.max_width)
        .mx_auto()
        .px(layout.padding.xl)
}

/// Lays `items` out in rows of `columns` equally wide cells.
///
/// The last row is padded with empty cells so columns line up.
pub(crate) fn grid_rows<E: IntoElement>(items: Vec<E>, columns: usize, gap: Pixels) -> Vec<Div> {
    let columns = columns.max(1);
    let mut items = items.into_iter().peekable();
    let mut rows = Vec::new();

    while items.peek().is_some() {
        let cells: Vec<_> = items
            .by_ref()
            .take(columns)
            .map(|item| div().flex_1().min_w_0().flex().child(item))
            .collect();
        let padding = columns - cells.len();

        rows.push(
            div()
                .w_full()
                .flex()
                .gap(gap)
                .children(cells)
                .children((0..padding).map(|_| div().flex_1())),
        );
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(count: usize) -> Vec<Div> {
        (0..count).map(|_| div()).collect()
    }

    #[test]
    fn test_grid_rows_chunking() {
        assert_eq!(grid_rows(cells(5), 3, gpui::px(8.)).len(), 2);
        assert_eq!(grid_rows(cells(6), 3, gpui::px(8.)).len(), 2);
        assert!(grid_rows(cells(0), 3, gpui::px(8.)).is_empty());
        assert_eq!(grid_rows(cells(2), 0, gpui::px(8.)).len(), 2);
    }

    #[test]
    fn test_scroll_indices_follow_layout_order() {
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.scroll_index(), idx);
        }
    }

    #[test]
    fn test_nav_links() {
        let links: Vec<_> = Section::nav_links().collect();

        assert_eq!(
            links,
            vec![
                (Section::Projects, "Projets"),
                (Section::Skills, "Compétences"),
                (Section::Experience, "Expérience"),
                (Section::Contact, "Contact"),
            ]
        );
    }
}
