//! ReelTUI - terminal browser for a movie catalog
//!
//! # Usage
//!
//! ```bash
//! reeltui
//! reeltui --region US --player mpv
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use reeltui::api::{CatalogClient, HttpCatalogClient};
use reeltui::app::{App, Request, Response};
use reeltui::cli::Cli;
use reeltui::player::TrailerPlayer;
use reeltui::{logging, ui};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let log_path = logging::init(&config)?;

    tracing::info!(
        api_url = %config.api_url,
        region = %config.region,
        log = ?log_path,
        "starting reeltui"
    );

    let client: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::with_timeout(
        config.api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));
    let player = config.player.map(TrailerPlayer::new);
    if let Some(player) = &player {
        tracing::info!(player = %player.player_type(), "external trailer player enabled");
    }
    let mut app = App::with_config(config);

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, client, player).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

// =============================================================================
// Terminal
// =============================================================================

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run `request` on its own task; the response comes back over `tx`
fn spawn_request(client: &Arc<dyn CatalogClient>, tx: &UnboundedSender<Response>, request: Request) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let response = request.execute(client.as_ref()).await;
        // Receiver only goes away on shutdown
        let _ = tx.send(response);
    });
}

/// Apply every response that has arrived since the last tick
fn drain_responses(app: &mut App, rx: &mut UnboundedReceiver<Response>) {
    while let Ok(response) = rx.try_recv() {
        app.complete(response);
    }
}

async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    client: Arc<dyn CatalogClient>,
    mut player: Option<TrailerPlayer>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Response>();

    while app.running {
        drain_responses(app, &mut rx);

        if let Some(player) = player.as_mut() {
            if let Err(e) = player.sync(app.overlay.trailer()) {
                tracing::warn!(error = %e, "trailer player");
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll without blocking the runtime's worker
        let ready = tokio::task::block_in_place(|| event::poll(TICK_RATE))?;
        if !ready {
            continue;
        }

        let request = match event::read()? {
            // Only handle key press events (ignore releases on Windows)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let area = terminal.get_frame().area();
                ui::click_intent(app, area, mouse.column, mouse.row)
                    .and_then(|intent| app.dispatch(intent))
            }
            _ => None,
        };

        if let Some(request) = request {
            spawn_request(&client, &tx, request);
        }
    }

    if let Some(mut player) = player {
        player.stop();
    }
    Ok(())
}
