//! A single-window personal portfolio rendered with GPUI.
//!
//! The page content comes from [`gpui_portfolio_content`]; this crate holds
//! the theme, the components and the views that lay it out.

pub mod components;

pub mod primitives;

pub mod state;

pub mod theme;

pub mod views;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
