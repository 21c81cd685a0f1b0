use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::assets::AssetProvider;

/// Icons and images bundled with the application.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[include = "*.jpeg"]
#[include = "*.png"]
#[exclude = "*.DS_Store"]
pub struct PortfolioAssets;

impl AssetProvider for PortfolioAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(PortfolioAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use gpui_portfolio_content::IconName;

    use super::*;

    #[test]
    fn test_every_icon_is_bundled() {
        for icon in IconName::ALL {
            assert!(
                PortfolioAssets.get(icon.asset_path()).is_some(),
                "missing {}",
                icon.asset_path()
            );
        }
    }

    #[test]
    fn test_portrait_is_not_bundled() {
        assert!(PortfolioAssets.get("portrait.jpeg").is_none());
    }
}
