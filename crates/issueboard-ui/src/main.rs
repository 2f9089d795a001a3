//! issueboard-ui: GUI for Issue Board
//!
//! GPUI-based dashboard mirroring the shared issue table, most recently
//! updated first, with live re-reads driven by the database change feed.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};

use issueboard_core::{BoardConfig, IssueStore, events};

mod actions;
mod refresh;
mod state;
mod views;

use views::MainView;

fn main() {
    issueboard_core::init_logging(false);
    events::log_app_startup();

    let config = match BoardConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            events::log_app_error(&e);
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let url = match config.database.resolved_url() {
        Ok(url) => url.to_string(),
        Err(e) => {
            events::log_app_error(&e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let store = match IssueStore::connect_lazy(&url, config.database.max_connections) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            events::log_app_error(&e);
            eprintln!("Failed to set up database access: {e}");
            std::process::exit(1);
        }
    };

    // All database work runs on this runtime; gpui tasks await its join
    // handles. Lives for the whole life of the window below.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to start tokio runtime");
    let handle = runtime.handle().clone();
    let channel = config.database.channel.clone();

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(760.0), px(640.0)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("Issue Board")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| MainView::new(store, channel, handle, cx)),
        )
        .expect("Failed to open window");
    });

    events::log_app_shutdown();
}
