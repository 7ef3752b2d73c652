mod app;

pub use app::{RecipeApp, WINDOW_TITLE};

use crate::config::AppConfig;
use crate::controller::SearchController;
use crate::dispatch::Waker;
use std::error::Error;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Open the "Recipe App" window and block until it is closed
pub fn run(config: AppConfig, runtime: Handle) -> Result<(), Box<dyn Error>> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([900.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| create_app(cc, config, runtime)),
    )?;

    Ok(())
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: AppConfig,
    runtime: Handle,
) -> Result<Box<dyn eframe::App>, Box<dyn Error + Send + Sync>> {
    // Background searches and the blink timer repaint the window through this
    let ctx = cc.egui_ctx.clone();
    let waker: Waker = Arc::new(move || ctx.request_repaint());

    let controller = SearchController::from_config(&config, runtime, waker)?;
    Ok(Box::new(RecipeApp::new(controller, &config.loading.colors)))
}
