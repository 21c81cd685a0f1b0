use chrono::Datelike;
use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};

use crate::{
    theme::{ThemeExt, ThemeTextSizeKind},
    views::sections::page_column,
};

pub const BUILT_WITH: &str = "Construit avec .NET, React & ❤️";

/// The copyright line for `year`.
pub fn copyright_line(name: &str, year: i32) -> String {
    format!("© {year} {name}. Tous droits réservés.")
}

/// The copyright line for the current local year.
pub fn current_copyright_line(name: &str) -> String {
    copyright_line(name, chrono::Local::now().year())
}

#[derive(IntoElement)]
pub struct Footer {
    name: SharedString,
}

impl Footer {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self { name: name.into() }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let secondary_text_color = colors.text.secondary;
        let border_color = colors.border;
        let padding = cx.get_theme().layout.padding.xl;
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);

        div()
            .w_full()
            .border_t_1()
            .border_color(border_color)
            .child(
                page_column(cx)
                    .py(padding)
                    .flex()
                    .items_center()
                    .justify_between()
                    .text_size(caption_size)
                    .text_color(secondary_text_color)
                    .child(current_copyright_line(&self.name))
                    .child(BUILT_WITH),
            )
    }
}
