use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use repostats::adapters::ReqwestHttpClient;
use repostats::app::App;
use repostats::config::RepoConfig;
use repostats::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use repostats::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Redraw and spinner cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn print_usage() {
    println!("repostats {VERSION}");
    println!();
    println!("Usage: repostats [owner/repo]");
    println!();
    println!("Options:");
    println!("  -h, --help       Print this help");
    println!("  -V, --version    Print the version");
    println!();
    println!("Environment:");
    println!("  REPOSTATS_OWNER  Override the repository owner");
    println!("  REPOSTATS_REPO   Override the repository name");
    println!("  RUST_LOG         Enable diagnostics (written to repostats.log)");
}

/// Parse CLI arguments into a config, or `None` if we already handled
/// the invocation (help/version) or it was invalid.
fn parse_args(config: RepoConfig) -> Option<RepoConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Some(config),
        [flag] if flag == "-h" || flag == "--help" => {
            print_usage();
            None
        }
        [flag] if flag == "-V" || flag == "--version" => {
            println!("repostats {VERSION}");
            None
        }
        [slug] => match config.with_slug(slug) {
            Some(config) => Some(config),
            None => {
                eprintln!("error: expected owner/repo, got '{slug}'");
                std::process::exit(2);
            }
        },
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
}

/// Route diagnostics to a file so they never corrupt the TUI.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    if let Ok(file) = std::fs::File::create("repostats.log") {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(file)
            .with_ansi(false)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = match parse_args(RepoConfig::from_env()) {
        Some(config) => config,
        None => return Ok(()),
    };

    let client = Arc::new(ReqwestHttpClient::new());
    let mut app = App::new(config, client);

    setup_panic_hook();
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;

    leave_tui_mode(&mut io::stdout());
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            }
            _ = tick.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
