use superapp::app::handlers::settings::{get_config_path, load_settings, save_settings};
use superapp::app::App;
use superapp::debug;
use superapp::utils::runtime::TOKIO_RT;

fn main() -> Result<(), eframe::Error> {
    // Image fetches run on the shared runtime; keep it entered for the window's lifetime
    let _guard = TOKIO_RT.enter();

    debug::init();
    tracing::info!("Starting SuperApp");

    let theme_config = load_settings();
    if !get_config_path().exists() {
        // Write the defaults once so there is a file to edit
        if let Err(e) = save_settings(&theme_config) {
            tracing::warn!("Could not write default theme config: {}", e);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SuperApp")
            .with_inner_size([430.0, 900.0])
            .with_min_inner_size([320.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "SuperApp",
        options,
        Box::new(move |cc| {
            let app = App::new(theme_config);
            app.setup(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    );

    if let Err(err) = &result {
        tracing::error!(error = %err, "Window closed with error");
    }
    result
}
