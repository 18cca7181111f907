mod app;
mod assets;
mod config;
mod gallery;
mod transform;

use app::PortraitsApp;
use config::AppConfig;
use gallery::Gallery;

fn build_window_icon() -> egui::IconData {
    let icon =
        image::load_from_memory_with_format(assets::WINDOW_ICON_PNG, image::ImageFormat::Png)
            .expect("embedded window icon should decode as PNG")
            .into_rgba8();
    let (width, height) = icon.dimensions();

    egui::IconData {
        rgba: icon.into_raw(),
        width,
        height,
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let gallery = match Gallery::new() {
        Ok(gallery) => gallery,
        Err(err) => {
            // An incomplete artwork table is a build defect, not something the
            // running app can recover from.
            eprintln!("art-portraits: invalid artwork table: {err}");
            std::process::exit(2);
        }
    };

    let width = config.window_width.unwrap_or(480.0);
    let height = config.window_height.unwrap_or(860.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Art Portraits")
            .with_app_id("art-portraits")
            .with_icon(build_window_icon())
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "art-portraits",
        native_options,
        Box::new(|cc| Ok(Box::new(PortraitsApp::new(cc, config, gallery)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_icon_buffer_matches_declared_dimensions() {
        let icon = build_window_icon();
        assert_eq!(icon.width, 128);
        assert_eq!(icon.height, 128);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
