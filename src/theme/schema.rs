use std::sync::LazyLock;

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};

static BUILTIN: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_json(include_str!("../../themes/default.json"))
        .expect("themes/default.json should always be valid")
});

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

impl Theme {
    /// The theme bundled with the application, holding a dark and a light variant.
    pub fn builtin() -> &'static Theme {
        &BUILTIN
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
    pub page: ThemePage,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub display: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub display: f32,
    pub heading: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

/// Page-level metrics shared by every section.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePage {
    /// Width the content column never grows past.
    #[serde(deserialize_with = "de_pixels")]
    pub max_width: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub navbar_height: Pixels,
    /// Vertical space between two sections.
    #[serde(deserialize_with = "de_pixels")]
    pub section_gap: Pixels,
    /// Height of the skills chart plot area.
    #[serde(deserialize_with = "de_pixels")]
    pub chart_height: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// The variant selected by [`ActiveVariantId`], or the first one when the
    /// id is unset or out of range.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let id = cx.try_global::<ActiveVariantId>().map_or(0, |id| id.0);
        // Never empty: only built by `de_variants`.
        self.variants.get(id).unwrap_or(&self.variants[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeVariant> {
        self.variants.iter()
    }

    /// Index of the first variant of the given kind.
    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }
}

/// Index of the theme variant every component resolves its colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveVariantId(pub usize);

impl Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
    pub border: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    /// Text drawn on top of `primary`.
    pub on_primary: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
}

impl ThemeTextColors {
    pub fn all(&self) -> (Rgba, Rgba) {
        (self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use gpui::px;

    use super::*;

    #[test]
    fn test_builtin_theme_has_dark_then_light() {
        let theme = Theme::builtin();

        assert_eq!(theme.variants.position(ThemeVariantKind::Dark), Some(0));
        assert_eq!(theme.variants.position(ThemeVariantKind::Light), Some(1));
    }

    #[test]
    fn test_builtin_page_metrics() {
        let page = &Theme::builtin().layout.page;

        assert!(page.max_width > px(0.));
        assert!(page.chart_height > px(0.));
        assert!(page.navbar_height > px(0.));
    }

    #[test]
    fn test_rejects_theme_without_variants() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../themes/default.json")).unwrap();
        json["variants"] = serde_json::json!([]);

        assert!(Theme::from_json(json.to_string()).is_err());
    }

    #[test]
    fn test_builtin_has_dark_then_light() {
        let kinds: Vec<_> = Theme::builtin().variants.iter().map(|variant| variant.kind).collect();

        assert_eq!(kinds, vec![ThemeVariantKind::Dark, ThemeVariantKind::Light]);
    }

    #[test]
    fn test_position_of_missing_kind() {
        let mut theme = Theme::builtin().clone();
        theme.variants.variants.truncate(1);

        assert_eq!(theme.variants.position(ThemeVariantKind::Light), None);
    }
}
