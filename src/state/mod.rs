//! Page-level state owned by the top-level view.

mod theme_toggle;
pub use theme_toggle::*;

mod mount_gate;
pub use mount_gate::*;
