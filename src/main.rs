use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::runtime::Runtime;

use hinter::app::{App, Submission};
use hinter::config::{self, ConfigResult};
use hinter::error::HinterError;
use hinter::suggest::{SuggestClient, SuggestionController};

/// How long to wait for a terminal event before draining suggestion results
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Live book-title autocomplete in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suggestion endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Query parameter carrying the typed value (overrides the config file)
    #[arg(long, value_name = "NAME")]
    param: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_debug_logging();

    let args = Args::parse();

    let ConfigResult {
        config: mut cfg,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(endpoint) = args.endpoint {
        cfg.suggest.endpoint = endpoint;
    }
    if let Some(param) = args.param {
        cfg.suggest.param = param;
    }

    // Fail on a bad endpoint before the terminal is taken over
    let client = SuggestClient::new(&cfg.suggest.endpoint, &cfg.suggest.param)?;
    log::debug!("Fetching suggestions from {}", client.endpoint());

    let runtime = Runtime::new().map_err(|e| HinterError::Runtime(e.to_string()))?;
    let controller = SuggestionController::new(&cfg.suggest, Arc::new(client), runtime.handle().clone());
    let app = App::new(controller, warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        log::warn!("Bracketed paste unavailable: {}", e);
    }

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Some(Submission { value, href }) = result? {
        match href {
            Some(href) => println!("{}\t{}", value, href),
            None => println!("{}", value),
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<Submission>, HinterError> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.poll_suggestions();

        if app.should_quit() {
            return Ok(app.submission().cloned());
        }
    }
}

/// Route `log` output to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::fs::File;

    let path = std::env::temp_dir().join("hinter-debug.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hinter=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
