use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use dirpick::config::{CONFIG_FILE, LOG_FILE, PickerConfig, dirpick_home};
use dirpick::runtime::{self, PickerExit};
use tracing::{Level, error, info};

/// Interactive fuzzy file picker
#[derive(Parser, Debug)]
#[command(name = "dirpick", version, about, long_about = None)]
struct Cli {
    /// Directory to start browsing in (default: current directory)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// List dot-prefixed entries
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// Hide dot-prefixed entries
    #[arg(long, overrides_with = "hidden")]
    no_hidden: bool,

    /// Apply .gitignore and .ignore rules to listings
    #[arg(long)]
    respect_ignore: bool,

    /// Open committed files with this command and keep picking
    #[arg(long, value_name = "CMD")]
    exec: Option<String>,

    /// Log level written to ~/.dirpick/dirpick.log
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Path to configuration file (default: ~/.dirpick/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Overlays command-line flags on the loaded configuration.
    fn apply_to(&self, config: &mut PickerConfig) {
        if self.hidden {
            config.show_hidden = true;
        }
        if self.no_hidden {
            config.show_hidden = false;
        }
        if self.respect_ignore {
            config.respect_ignore = true;
        }
        if let Some(exec) = &self.exec {
            config.open_command = Some(exec.clone());
        }
        if let Some(log_level) = &self.log_level {
            config.log_level.clone_from(log_level);
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(exit_code) => exit_code,
        Err(error) => {
            error!("{error}");
            let _ = writeln!(io::stderr(), "dirpick: {error}");

            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> io::Result<ExitCode> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| dirpick_home().join(CONFIG_FILE));
    let mut config = PickerConfig::load(&config_path).map_err(io::Error::other)?;
    cli.apply_to(&mut config);
    let level = config.tracing_level().map_err(io::Error::other)?;
    init_logging(level);
    info!(config = %config_path.display(), "dirpick starting");

    match runtime::run(&config, cli.directory).await? {
        PickerExit::Selected(path) => {
            writeln!(io::stdout(), "{}", path.display())?;

            Ok(ExitCode::SUCCESS)
        }
        PickerExit::Cancelled => Ok(ExitCode::from(1)),
    }
}

/// Sends tracing output to `~/.dirpick/dirpick.log`; the terminal belongs
/// to the picker. Logging stays off when the file cannot be opened.
fn init_logging(level: Level) {
    let home = dirpick_home();
    if fs::create_dir_all(&home).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(home.join(LOG_FILE))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .init();
}
