use gpui::App;
use gpui_portfolio_content::IconName;

use crate::theme::{ActiveVariantId, ThemeExt, ThemeVariantKind};

/// The dark/light switch. Starts dark and is not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    dark: bool,
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flips the state and returns whether it is now dark.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn kind(&self) -> ThemeVariantKind {
        if self.dark {
            ThemeVariantKind::Dark
        } else {
            ThemeVariantKind::Light
        }
    }

    /// Icon of the button: the sun while dark, the moon while light.
    pub fn icon(&self) -> IconName {
        if self.dark { IconName::Sun } else { IconName::Moon }
    }

    /// Points the active variant at the one matching this state.
    ///
    /// Falls back to the first variant when the theme has none of that kind.
    pub fn apply(&self, cx: &mut App) -> usize {
        let kind = self.kind();

        let id = cx.get_theme().variants.position(kind).unwrap_or_else(|| {
            tracing::warn!(?kind, "theme has no variant of this kind, using the first one");
            0
        });

        cx.set_global(ActiveVariantId(id));
        tracing::debug!(?kind, id, "theme variant applied");

        id
    }
}
