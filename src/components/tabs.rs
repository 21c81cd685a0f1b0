use std::time::Duration;

use gpui::{
    AnyElement, App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;
use indexmap::IndexMap;

use crate::{
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::{ElementIdExt, active_transition},
};

struct TabEntry {
    label: SharedString,
    content: AnyElement,
}

/// A row of triggers over a single visible panel.
///
/// Selection is kept per element id. The first tab is selected until a
/// trigger is clicked.
#[derive(IntoElement)]
pub struct Tabs {
    id: ElementId,
    tabs: IndexMap<SharedString, TabEntry>,
}

impl Tabs {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            tabs: IndexMap::new(),
        }
    }

    /// Adds a tab. A key that was already added keeps its position and gets
    /// the new label and content.
    pub fn tab(
        mut self,
        key: impl Into<SharedString>,
        label: impl Into<SharedString>,
        content: impl IntoElement,
    ) -> Self {
        self.tabs.insert(
            key.into(),
            TabEntry {
                label: label.into(),
                content: content.into_any_element(),
            },
        );
        self
    }
}

/// The key to show given the last clicked one.
///
/// Falls back to the first key when nothing was clicked yet or the clicked
/// key is gone.
pub fn selected_tab<'a>(
    keys: impl IntoIterator<Item = &'a SharedString>,
    clicked: Option<&SharedString>,
) -> Option<SharedString> {
    let mut first = None;

    for key in keys {
        if clicked == Some(key) {
            return Some(key.clone());
        }
        first.get_or_insert(key);
    }

    first.cloned()
}

impl RenderOnce for Tabs {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let list_bg = colors.background.tertiary;
        let trigger_bg = colors.background.primary;
        let layout = &cx.get_theme().layout;
        let corner_radius = layout.corner_radii.md;
        let padding = layout.padding.sm;
        let gap = layout.padding.lg;
        let text_size = ThemeTextSizeKind::Body.resolve(cx);
        let text_weight = ThemeTextSizeKind::Body.weight(cx);

        let clicked_state = window.use_keyed_state(
            self.id.with_suffix("state:selected"),
            cx,
            |_window, _cx| None::<SharedString>,
        );
        let selected = selected_tab(self.tabs.keys(), clicked_state.read(cx).as_ref());

        let mut triggers = Vec::with_capacity(self.tabs.len());
        let mut panel = None;

        for (idx, (key, entry)) in self.tabs.into_iter().enumerate() {
            let is_selected = selected.as_ref() == Some(&key);
            let trigger_id = self.id.with_index(idx);

            let progress = *active_transition(
                trigger_id.clone(),
                window,
                cx,
                Duration::from_millis(200),
                is_selected,
            )
            .evaluate(window, cx);

            let clicked_state = clicked_state.clone();
            let click_key = key.clone();

            triggers.push(
                div()
                    .id(trigger_id)
                    .relative()
                    .flex_1()
                    .flex()
                    .justify_center()
                    .px(padding * 2.)
                    .py(padding)
                    .cursor(CursorStyle::PointingHand)
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(corner_radius - padding / 2.)
                            .bg(trigger_bg.lerp(&list_bg, 1. - progress)),
                    )
                    .child(
                        div()
                            .text_size(text_size)
                            .font_weight(text_weight)
                            .text_color(secondary_text_color.lerp(&primary_text_color, progress))
                            .child(entry.label),
                    )
                    .on_click(move |_event, _window, cx| {
                        tracing::debug!(tab = %click_key, "tab selected");
                        clicked_state.update(cx, |this, cx| {
                            *this = Some(click_key.clone());
                            cx.notify();
                        });
                    }),
            );

            if is_selected {
                panel = Some(entry.content);
            }
        }

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap(gap)
            .child(
                div()
                    .relative()
                    .flex()
                    .gap(px(2.))
                    .p(padding / 2.)
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(corner_radius)
                            .bg(list_bg),
                    )
                    .children(triggers),
            )
            .children(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&'static str]) -> Vec<SharedString> {
        keys.iter().map(|key| SharedString::from(*key)).collect()
    }

    #[test]
    fn test_first_tab_is_default() {
        let keys = keys(&["certs", "testimonials"]);
        assert_eq!(selected_tab(&keys, None), Some("certs".into()));
    }

    #[test]
    fn test_clicked_tab_wins() {
        let keys = keys(&["certs", "testimonials"]);
        let clicked = SharedString::from("testimonials");

        assert_eq!(selected_tab(&keys, Some(&clicked)), Some(clicked.clone()));
    }

    #[test]
    fn test_unknown_click_falls_back_to_first() {
        let keys = keys(&["certs", "testimonials"]);
        let clicked = SharedString::from("projects");

        assert_eq!(selected_tab(&keys, Some(&clicked)), Some("certs".into()));
    }

    #[test]
    fn test_no_tabs_selects_nothing() {
        assert_eq!(selected_tab(&keys(&[]), None), None);
    }

    #[test]
    fn test_duplicate_key_keeps_position() {
        let tabs = Tabs::new("tabs")
            .tab("certs", "Certifications", div())
            .tab("testimonials", "Témoignages", div())
            .tab("certs", "Badges", div());

        assert_eq!(tabs.tabs.keys().cloned().collect::<Vec<_>>(), keys(&["certs", "testimonials"]));
        assert_eq!(tabs.tabs[0].label, SharedString::from("Badges"));
    }

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use super::super::*;
        use gpui::{AppContext, TestAppContext, VisualTestContext};

        use crate::theme::Theme;

        #[gpui::test]
        fn test_tabs_render_in_window(cx: &mut TestAppContext) {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::builtin());
                cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| TabsTestView))
                    .unwrap()
            });

            let cx = &mut VisualTestContext::from_window(window.into(), cx);
            cx.run_until_parked();
        }

        struct TabsTestView;

        impl gpui::Render for TabsTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div().size_full().child(
                    Tabs::new("recognition")
                        .tab("certs", "Certifications", div().child("AZ-204"))
                        .tab("testimonials", "Témoignages", div().child("“Super.”")),
                )
            }
        }
    }
}
