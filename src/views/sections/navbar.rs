use gpui::{
    App, ClickEvent, CursorStyle, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_portfolio_content::IconName;
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::{Button, ButtonSize, Icon, ThemeToggleButton},
    state::ThemeToggle,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::RgbaExt,
    views::sections::{NavigateHandler, Section, page_column},
};

/// The bar pinned above the scroll area.
#[derive(IntoElement)]
pub struct Navbar {
    name: SharedString,
    cv: SharedString,
    toggle: ThemeToggle,
    navigate: NavigateHandler,
    on_toggle_theme: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

impl Navbar {
    pub fn new(
        name: impl Into<SharedString>,
        cv: impl Into<SharedString>,
        toggle: ThemeToggle,
        navigate: NavigateHandler,
        on_toggle_theme: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            cv: cv.into(),
            toggle,
            navigate,
            on_toggle_theme: Box::new(on_toggle_theme),
        }
    }
}

impl RenderOnce for Navbar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let (primary_text_color, secondary_text_color) = colors.text.all();
        let accent_color = colors.accent.primary;
        let bg_color = colors.background.primary;
        let border_color = colors.border;
        let layout = &cx.get_theme().layout;
        let height = layout.page.navbar_height;
        let logo_size = layout.size.md;
        let corner_radius = layout.corner_radii.md;
        let name_weight = ThemeTextSizeKind::Sm.weight(cx);
        let link_size = ThemeTextSizeKind::Body.resolve(cx);

        let links = Section::nav_links().map(|(section, label)| {
            let navigate = self.navigate.clone();

            div()
                .id(SharedString::from(format!("nav:{label}")))
                .debug_selector(move || format!("nav:{label}"))
                .cursor(CursorStyle::PointingHand)
                .text_size(link_size)
                .text_color(secondary_text_color)
                .hover(|this| this.text_color(primary_text_color))
                .child(label)
                .on_click(move |_event, window, cx| (navigate)(&section, window, cx))
        });

        let on_toggle_theme = self.on_toggle_theme;

        div()
            .w_full()
            .h(height)
            .flex_none()
            .bg(bg_color)
            .border_b_1()
            .border_color(border_color)
            .child(
                page_column(cx)
                    .h_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.))
                            .child(
                                div()
                                    .relative()
                                    .size(logo_size)
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .child(
                                        squircle()
                                            .absolute_expand()
                                            .rounded(corner_radius)
                                            .bg(accent_color.alpha(0.15)),
                                    )
                                    .child(Icon::named(IconName::Code).color(accent_color)),
                            )
                            .child(
                                div()
                                    .font_weight(name_weight)
                                    .text_color(primary_text_color)
                                    .child(self.name),
                            ),
                    )
                    .child(div().flex().items_center().gap(px(24.)).children(links))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.))
                            .child(
                                Button::new("nav:cv")
                                    .text("CV")
                                    .icon(IconName::Download)
                                    .size(ButtonSize::Sm)
                                    .href(self.cv),
                            )
                            .child(ThemeToggleButton::new(self.toggle, move |event, window, cx| {
                                (on_toggle_theme)(event, window, cx)
                            })),
                    ),
            )
    }
}
