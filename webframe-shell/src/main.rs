mod app;
mod host;
mod viewer_panel;

fn main() {
    // Initialize the logger
    env_logger::init();
    log::info!("Starting Webframe");

    app::app_main();
}
