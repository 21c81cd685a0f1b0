use gpui::{App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, Window, div};

use crate::{
    components::{Button, ButtonVariant},
    state::ThemeToggle,
};

/// Accessible label of the toggle.
pub const THEME_TOGGLE_LABEL: &str = "Basculer le thème";

/// Icon-only button showing the current dark/light state.
///
/// In test builds the button can be looked up by the asset path of the icon
/// it shows.
#[derive(IntoElement)]
pub struct ThemeToggleButton {
    toggle: ThemeToggle,
    on_toggle: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

impl ThemeToggleButton {
    pub fn new(
        toggle: ThemeToggle,
        on_toggle: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            toggle,
            on_toggle: Box::new(on_toggle),
        }
    }
}

impl RenderOnce for ThemeToggleButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let icon = self.toggle.icon();
        let on_toggle = self.on_toggle;

        div().debug_selector(move || icon.asset_path().into()).child(
            Button::new(THEME_TOGGLE_LABEL)
                .icon(icon)
                .variant(ButtonVariant::Ghost)
                .on_click(move |event, window, cx| (on_toggle)(event, window, cx)),
        )
    }
}
