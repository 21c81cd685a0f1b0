use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeVariant};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Shorthand for the colors of the active variant.
    fn active_variant(&self) -> &ThemeVariant;

    /// Index of the active variant.
    fn active_variant_id(&self) -> usize;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn active_variant(&self) -> &ThemeVariant {
        self.get_theme().variants.active(self)
    }

    fn active_variant_id(&self) -> usize {
        self.try_global::<ActiveVariantId>().map_or(0, |id| id.0)
    }
}
