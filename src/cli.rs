use clap::Parser;
use std::path::PathBuf;

// Build version with toolkit info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe/egui 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Scrollable list of buttons with expandable description panels
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// JSON content file: array of {"label", "description"} (default: buttons.json)
    #[arg(value_name = "CONTENT")]
    pub content: Option<PathBuf>,

    /// Enable debug logging to file (default: accordion.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Expand/collapse animation duration in milliseconds
    #[arg(long = "duration-ms", value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Expand every panel to this fixed height instead of measuring its text
    #[arg(long = "fixed-height", value_name = "PX")]
    pub fixed_height: Option<f32>,

    /// TTF/OTF font file used for labels and descriptions (persisted)
    #[arg(long = "font", value_name = "FILE")]
    pub font: Option<PathBuf>,
}
