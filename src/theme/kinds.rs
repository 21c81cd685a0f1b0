#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, FontWeight};

use crate::theme::ThemeExt;

/// Text roles that resolve to theme-defined sizes and weights.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> FontWeight)]
pub enum ThemeTextSizeKind {
    /// Hero title.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.display)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.display))]
    Display,
    /// Section titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.heading))]
    Lg,
    /// Card titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.heading))]
    Md,
    /// Counter values and small headings.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_sm)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.heading))]
    Sm,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.body))]
    Body,
    /// Badges, captions and the footer.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = FontWeight(cx.get_theme().layout.text.default_font.weights.caption))]
    Caption,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Background color variants from the active theme variant.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Page background.
    #[assoc(resolve = cx.active_variant().colors.background.primary)]
    Primary,
    /// Cards.
    #[assoc(resolve = cx.active_variant().colors.background.secondary)]
    Secondary,
    /// Inputs, badges and tiles inside cards.
    #[assoc(resolve = cx.active_variant().colors.background.tertiary)]
    Tertiary,
    #[assoc(resolve = cx.active_variant().colors.background.quaternary)]
    Quaternary,
    #[assoc(resolve = cx.active_variant().colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces.
///
/// `next()` gives the color used for borders and nested elements drawn on
/// top of the layer.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    #[assoc(resolve = cx.active_variant().colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    #[assoc(resolve = cx.active_variant().colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    #[assoc(resolve = cx.active_variant().colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    #[assoc(resolve = cx.active_variant().colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}

impl ThemeLayerKind {
    /// The layer for an element nested inside this one.
    pub const fn nested(self) -> ThemeLayerKind {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Tertiary,
            Self::Tertiary | Self::Quaternary => Self::Quaternary,
        }
    }
}
