use gpui::{App, Window};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::theme::{Theme, ThemeExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "gpui_portfolio=info,gpui_portfolio_content=info";

/// Registers input key bindings and installs the built-in theme unless one
/// is already set.
pub fn init(cx: &mut App) {
    gpui_primitives::input::init(cx);

    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::builtin());
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
