//! HRnet - Desktop app for creating employee records.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use hrnet as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use app::data::ReferenceData;
use app::ui::App;

/// Desktop app for creating employee records.
#[derive(Parser)]
#[command(name = "hrnet")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> app::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };
    let loaded = AppConfig::try_load(&config_path);

    // Initialize logging
    let logging = match &loaded {
        ConfigLoadResult::Loaded(config) => config.logging.clone(),
        _ => LoggingConfig::default(),
    };
    let _log_guard = init_logging(&logging);

    tracing::info!("HRnet starting...");
    tracing::info!("Config path: {:?}", config_path);

    let config = match loaded {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {}", e);
            return Err(e.into());
        }
    };

    let reference = ReferenceData::from_config(&config.reference).inspect_err(|e| {
        tracing::error!("Reference data invalid: {}", e);
    })?;
    tracing::info!(
        "Reference data: {} departments, {} states",
        reference.departments.len(),
        reference.states.len()
    );

    run_app(config, config_path, reference)
}

/// Console logging, plus a daily-rotated file when enabled.
///
/// The returned guard must stay alive for the file writer to flush.
fn init_logging(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let (file_layer, guard) = match AppConfig::log_dir().filter(|_| logging.file) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "hrnet.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

/// Run the main application window.
fn run_app(config: AppConfig, config_path: PathBuf, reference: ReferenceData) -> app::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("HRnet")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "HRnet",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(config, config_path, reference)))
        }),
    )?;

    Ok(())
}
