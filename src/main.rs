use accordion::app::AccordionApp;
use accordion::cli::Args;
use accordion::config;
use accordion::content;
use accordion::core::item::PanelHeightPolicy;

use clap::Parser;
use eframe::egui;
use log::{debug, error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| config::data_file("accordion.log", &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info)
            .format_timestamp_millis()
            .init();
    }

    info!("Accordion starting...");
    debug!("Command-line args: {:?}", args);

    // Content is loaded before any UI exists; failure is fatal
    let content_path = config::resolve_content_path(args.content.clone());
    let entries = match content::load_content(&content_path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{:#}", e);
            return Err(e.into());
        }
    };

    let persistence_path = config::config_file("accordion.json", &path_config);
    info!("Config path: {}", persistence_path.display());

    let defaults = accordion::dialogs::prefs::AppSettings::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(defaults.window_title.clone())
            .with_inner_size([defaults.window_width, defaults.window_height])
            .with_resizable(!defaults.fixed_window),
        // Size comes from settings, applied on the first frame
        persist_window: false,
        persistence_path: Some(persistence_path),
        ..Default::default()
    };

    eframe::run_native(
        "Accordion",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: AccordionApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    AccordionApp::default()
                });

            // CLI arguments have priority over persisted settings
            if let Some(ms) = args.duration_ms {
                app.settings.animation_ms = ms;
            }
            if let Some(height) = args.fixed_height {
                app.settings.height_policy = PanelHeightPolicy::Fixed { height };
            }
            if let Some(font) = &args.font {
                app.settings.font_path = Some(font.clone());
            }

            app.sync_font(&cc.egui_ctx);

            app.load_entries(entries, content_path);
            app.sync_window_chrome(&cc.egui_ctx);
            info!(
                "Applied settings: duration={}ms, policy={:?}",
                app.settings.animation_ms, app.settings.height_policy
            );

            Ok(Box::new(app))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
