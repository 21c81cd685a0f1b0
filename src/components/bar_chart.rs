use std::time::Duration;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px, relative,
};
use gpui_portfolio_content::chart::SkillBar;
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
    utils::{ElementIdExt, RgbaExt, active_transition},
};

/// Space kept above the tallest bar for its hover label.
const TOOLTIP_ROOM: Pixels = px(28.);

/// A vertical bar chart of skill levels.
///
/// Nothing is plotted until `mounted` is set; the chart keeps its height
/// either way so the page doesn't jump when the bars appear.
#[derive(IntoElement)]
pub struct BarChart {
    id: ElementId,
    bars: Vec<SkillBar>,
    mounted: bool,
}

impl BarChart {
    pub fn new(id: impl Into<ElementId>, bars: Vec<SkillBar>) -> Self {
        Self {
            id: id.into(),
            bars,
            mounted: false,
        }
    }

    pub fn mounted(mut self, mounted: bool) -> Self {
        self.mounted = mounted;
        self
    }

    /// Bars that will be drawn on the next render.
    pub fn visible_bars(&self) -> &[SkillBar] {
        if self.mounted { &self.bars } else { &[] }
    }
}

impl RenderOnce for BarChart {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();
        let secondary_text_color = colors.text.secondary;
        let bar_color = colors.accent.primary;
        let grid_color = colors.border;
        let tooltip_bg = colors.background.quaternary;
        let tooltip_text_color = colors.text.primary;
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);
        let height = cx.get_theme().layout.page.chart_height;
        let corner_radius = ThemeLayoutCornerRadiiKind::Sm.resolve(cx);
        let bar_gap = ThemeLayoutPaddingKind::Md.resolve(cx);

        let mut columns = Vec::with_capacity(self.visible_bars().len());

        for (idx, bar) in self.visible_bars().iter().enumerate() {
            let bar_id = self.id.with_index(idx);

            let is_hover_state =
                window.use_keyed_state(bar_id.with_suffix("state:hover"), cx, |_window, _cx| false);
            let is_hover = *is_hover_state.read(cx);

            let grown = *active_transition(
                bar_id.clone(),
                window,
                cx,
                Duration::from_millis(700 + 60 * idx as u64),
                true,
            )
            .evaluate(window, cx);

            let tooltip = bar.tooltip();

            columns.push(
                div()
                    .id(bar_id)
                    .debug_selector(move || format!("skill-bar-{idx}"))
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .justify_end()
                    .items_center()
                    .gap(px(6.))
                    .child(
                        div()
                            .relative()
                            .w_full()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .justify_end()
                            .pt(TOOLTIP_ROOM)
                            .child(
                                div()
                                    .relative()
                                    .w_full()
                                    .h(relative(bar.fraction * grown))
                                    .child(
                                        squircle()
                                            .absolute_expand()
                                            .rounded(corner_radius)
                                            .bg(bar_color.fade(if is_hover { 1. } else { 0.85 })),
                                    ),
                            )
                            .when(is_hover, |this| {
                                this.child(
                                    div()
                                        .absolute()
                                        .top_0()
                                        .left_0()
                                        .right_0()
                                        .flex()
                                        .justify_center()
                                        .child(
                                            div()
                                                .px(px(6.))
                                                .py(px(2.))
                                                .rounded(corner_radius)
                                                .bg(tooltip_bg)
                                                .text_size(caption_size)
                                                .text_color(tooltip_text_color)
                                                .whitespace_nowrap()
                                                .child(tooltip),
                                        ),
                                )
                            }),
                    )
                    .child(
                        div()
                            .w_full()
                            .text_size(caption_size)
                            .text_color(secondary_text_color)
                            .text_center()
                            .text_ellipsis()
                            .child(bar.label.clone()),
                    )
                    .on_hover(move |hover, _window, cx| {
                        is_hover_state.update(cx, |this, cx| {
                            *this = *hover;
                            cx.notify();
                        });
                    }),
            );
        }

        div()
            .id(self.id)
            .w_full()
            .h(height)
            .flex()
            .items_end()
            .gap(bar_gap)
            .border_b_1()
            .border_color(grid_color.fade(0.6))
            .children(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui_portfolio_content::{Content, chart::skill_bars};

    #[test]
    fn test_no_bars_before_mount() {
        let chart = BarChart::new("chart", skill_bars(&Content::builtin().skills));
        assert!(chart.visible_bars().is_empty());
    }

    #[test]
    fn test_one_bar_per_skill_after_mount() {
        let skills = &Content::builtin().skills;
        let chart = BarChart::new("chart", skill_bars(skills)).mounted(true);

        assert_eq!(chart.visible_bars().len(), 10);
        for (bar, skill) in chart.visible_bars().iter().zip(skills) {
            assert_eq!(bar.label, skill.name);
        }
    }

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use super::super::*;
        use gpui::{AppContext, TestAppContext, VisualTestContext};
        use gpui_portfolio_content::{Content, chart::skill_bars};

        use crate::theme::Theme;

        const BAR_SELECTORS: [&str; 12] = [
            "skill-bar-0",
            "skill-bar-1",
            "skill-bar-2",
            "skill-bar-3",
            "skill-bar-4",
            "skill-bar-5",
            "skill-bar-6",
            "skill-bar-7",
            "skill-bar-8",
            "skill-bar-9",
            "skill-bar-10",
            "skill-bar-11",
        ];

        fn drawn_bars(cx: &mut VisualTestContext) -> usize {
            BAR_SELECTORS
                .into_iter()
                .filter(|&selector| cx.debug_bounds(selector).is_some())
                .count()
        }

        #[gpui::test]
        fn test_bars_are_drawn_only_once_mounted(cx: &mut TestAppContext) {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::builtin());
                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| ChartTestView { mounted: false })
                })
                .unwrap()
            });

            let cx = &mut VisualTestContext::from_window(window.into(), cx);
            cx.run_until_parked();
            assert_eq!(drawn_bars(cx), 0);

            window
                .update(cx, |view, _window, cx| {
                    view.mounted = true;
                    cx.notify();
                })
                .unwrap();
            cx.run_until_parked();

            assert_eq!(drawn_bars(cx), Content::builtin().skills.len());
            assert_eq!(drawn_bars(cx), 10);
        }

        struct ChartTestView {
            mounted: bool,
        }

        impl gpui::Render for ChartTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div().size_full().child(
                    BarChart::new("chart", skill_bars(&Content::builtin().skills))
                        .mounted(self.mounted),
                )
            }
        }
    }
}
