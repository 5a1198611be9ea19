//! Portfolio TUI Entry Point
//!
//! Launches the three-page portfolio in the terminal.
//!
//! Usage:
//!   portfolio [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Configuration file (default: ~/.config/portfolio/portfolio.toml)
//!   --state <PATH>     State file for the saved theme and page
//!   --reset            Forget the saved theme and page before starting
//!   --log-file <PATH>  Write logs to a file (the terminal is busy drawing)

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_core::{
    default_config_path, default_state_path, load_config_from_path, ConfigOverrides, FileStorage,
    MemoryStorage, Portfolio, PortfolioConfig, SharedStorage,
};
use portfolio_tui::App;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "portfolio=info";

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "A three-page portfolio in your terminal")]
struct Cli {
    /// Configuration file
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// State file for the saved theme and page
    #[arg(long)]
    state: Option<PathBuf>,

    /// Forget the saved theme and page before starting
    #[arg(long)]
    reset: bool,

    /// Write logs to this file
    #[arg(long, env = "PORTFOLIO_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Start dark when no theme is saved, whatever the terminal says
    #[arg(long, conflicts_with = "prefer_light")]
    prefer_dark: bool,

    /// Start light when no theme is saved, whatever the terminal says
    #[arg(long)]
    prefer_light: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ref path) = self.state {
            overrides = overrides.with_storage_path(path.clone());
        }
        if self.prefer_dark {
            overrides = overrides.with_prefers_dark(true);
        } else if self.prefer_light {
            overrides = overrides.with_prefers_dark(false);
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout belongs to the UI, so logs only go to a file
    init_logging(cli.log_file.as_ref())?;

    // Configuration errors are reported before the terminal is taken over
    let config = load(&cli)?;
    let storage = open_storage(&config, cli.reset)?;
    let portfolio = Portfolio::from_config(&config, storage, Instant::now())
        .context("Failed to set up contact delivery")?;

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: portfolio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Running in a non-interactive environment (CI, container)");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, portfolio).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    portfolio: Portfolio,
) -> anyhow::Result<()> {
    let mut app = App::new(portfolio)?;
    app.run(terminal).await
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

fn load(cli: &Cli) -> anyhow::Result<PortfolioConfig> {
    let path = cli.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("Failed to load configuration")?;
    cli.overrides().apply(&mut config);

    tracing::info!(
        source = %config.source(),
        file = ?config.config_file_path,
        "Configuration ready"
    );
    Ok(config)
}

fn open_storage(config: &PortfolioConfig, reset: bool) -> anyhow::Result<SharedStorage> {
    let Some(path) = config.storage_path.clone().or_else(default_state_path) else {
        tracing::warn!("No data directory; theme and page will not be remembered");
        return Ok(MemoryStorage::new().shared());
    };

    let storage = FileStorage::open(&path);
    if reset {
        storage
            .clear()
            .with_context(|| format!("Failed to reset state at {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved state cleared");
    }
    Ok(storage.shared())
}
