use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, Menu, TitlebarOptions, WindowBounds,
    WindowOptions, actions, point, px, size,
};
use gpui_portfolio::{PortfolioAssets, assets, theme::ThemeExt, views::PortfolioView};
use gpui_portfolio_content::Content;

actions!(window, [TabNext, TabPrev]);

fn main() {
    gpui_portfolio::init_tracing();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![PortfolioAssets])
        .run(|cx: &mut App| {
            gpui_portfolio::init(cx);

            let content = Content::builtin();

            cx.set_menus(vec![Menu {
                name: content.profile.name.clone().into(),
                items: vec![],
            }]);

            if let Err(err) = open_main_window(content, cx) {
                tracing::error!(%err, "failed to open the portfolio window");
                cx.quit();
                return;
            }

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn open_main_window(content: &'static Content, cx: &mut App) -> anyhow::Result<()> {
    let page_width = cx.get_theme().layout.page.max_width;
    let bounds = Bounds::centered(None, size(page_width, px(900.)), cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(format!("{} — Portfolio", content.profile.name).into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(10.), px(10.))),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| cx.new(|cx| PortfolioView::new(content, window, cx)),
    )?;

    tracing::info!(name = %content.profile.name, "portfolio window opened");

    Ok(())
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([
        KeyBinding::new("tab", TabNext, None),
        KeyBinding::new("shift-tab", TabPrev, None),
    ]);
}
