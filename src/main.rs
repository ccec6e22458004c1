use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

use texsearch::app::App;
use texsearch::config::{Config, load_config};
use texsearch::input::InputCapture;
use texsearch::logging;
use texsearch::suggest::{SuggestionFetcher, SuggestionProvider};
use texsearch::texture::Texture;

/// How long to wait for terminal input before polling fetches again
const TICK: Duration = Duration::from_millis(50);

/// Search textures as you type and print the ones you pick
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Suggestion endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Local JSON catalog of textures to search instead of an endpoint
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Config file (default: <config_dir>/texsearch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to <cache_dir>/texsearch/texsearch.log
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    if logging::enabled(cli.debug) {
        if let Some(path) = logging::log_file_path() {
            logging::init(&path)?;
        }
    }

    let config: Config = load_config(cli.config.as_deref())?;

    // Resolve the source before touching the terminal so errors print plainly
    let provider =
        SuggestionProvider::select(cli.catalog.as_deref(), cli.endpoint.as_deref(), &config.source)?;
    let source_label = provider.label();
    log::debug!("Starting with {} source", source_label);

    let fetcher = SuggestionFetcher::spawn(Ok(provider));
    let app = App::new(fetcher, config.style, source_label);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    print_picked(&result?)
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Vec<Texture>> {
    let _capture = InputCapture::acquire(io::stdout())?;

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(TICK)? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(app.into_picked())
}

fn print_picked(picked: &[Texture]) -> Result<()> {
    for texture in picked {
        println!("{}", serde_json::to_string(texture)?);
    }
    Ok(())
}
