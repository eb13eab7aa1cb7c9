use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

// Declare modules
mod client;
mod constants;
mod domain;
mod event;
mod fetch;
mod handler;
mod settings;
mod state;
#[cfg(test)]
mod test_utils;
mod theme;
mod tui;
mod ui;

use crate::{
    client::ChainClient,
    constants::{FETCH_EVENT_CAPACITY, TICK_RATE},
    event::{Action, FetchUpdateEvent},
    fetch::FetchManager,
    handler::handle_event,
    state::App,
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// wasmscope - Terminal UI for exploring CosmWasm transactions
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Transaction hash to load on startup
    tx_hash: Option<String>,

    /// Backend deployment to connect to
    #[arg(short, long, env = "WASMSCOPE_BACKEND", default_value = "devnet")]
    backend: String,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the backends this build knows about
    Backends,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger FIRST
    env_logger::init();

    let cli = Cli::parse();
    if let Some(Commands::Backends) = &cli.command {
        print_backends();
        return Ok(());
    }

    color_eyre::install()?;

    // Resolve the backend before the terminal is taken over, so an unknown
    // selector fails fast with a readable message.
    let backend = settings::resolve_backend(&cli.backend)?;
    tracing::info!("using backend {}", backend.name);

    let mut terminal = tui::init()?;
    let mut app = App::new(backend);

    // Channel for fetch results -> main loop
    let (fetch_event_sender, mut fetch_event_receiver) =
        mpsc::channel::<FetchUpdateEvent>(FETCH_EVENT_CAPACITY);

    let client = Arc::new(ChainClient::new(&app.settings));
    let fetch_manager = FetchManager::new(
        client,
        tokio::runtime::Handle::current(),
        fetch_event_sender,
    );

    if let Some(tx_hash) = &cli.tx_hash {
        app.load_transaction(tx_hash, &fetch_manager);
    }

    let result = run_app(
        &mut terminal,
        &mut app,
        &fetch_manager,
        &mut fetch_event_receiver,
    )
    .await;

    tui::restore()?;
    result
}

/// Print the backend registry table and exit.
fn print_backends() {
    for selector in settings::known_selectors() {
        match settings::resolve_backend(selector) {
            Ok(backend) => {
                println!(
                    "{:<12} {} (prefix: {}, gas: {})",
                    backend.name,
                    backend.node_urls.join(", "),
                    backend.address_prefix,
                    backend.gas_price,
                );
            }
            Err(e) => eprintln!("{selector:<12} broken registry entry: {e}"),
        }
    }
}

/// Main application loop.
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    fetch_manager: &FetchManager,
    fetch_event_receiver: &mut mpsc::Receiver<FetchUpdateEvent>,
) -> Result<()> {
    loop {
        if app.exit {
            break;
        }

        // --- Drawing ---
        terminal.draw(|frame| ui::render(app, frame))?;

        // --- Terminal events ---
        // Poll with a small timeout so fetch events stay responsive.
        if crossterm::event::poll(Duration::from_millis(1))? {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Resize(..)) => {
                    // Redraw happens at the top of the next iteration.
                    continue;
                }
                Ok(event) => {
                    if let Some(action) = handle_event(app, event) {
                        app.update(action, fetch_manager);
                    }
                }
                Err(_) => {
                    app.exit = true;
                }
            }
        }

        // --- Fetch events ---
        match fetch_event_receiver.try_recv() {
            Ok(fetch_event) => {
                app.update(Action::from(fetch_event), fetch_manager);
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                app.exit = true;
            }
        }

        // Small sleep to keep CPU usage down between events.
        tokio::time::sleep(TICK_RATE.min(Duration::from_millis(50))).await;
    }
    Ok(())
}
