mod app;
mod event;
mod theme;
mod ui;
mod views;

use app::{App, ControlAction};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use event::{AppEvent, EventReader};
use ratatui::prelude::*;
use spiderpanel_core::{parse_base_url, PanelConfig, SpiderClient};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Parser)]
#[command(name = "spiderpanel-tui", about = "Spider admin panel (terminal UI)")]
struct Args {
    /// Spider server base URL; overrides SPIDER_URL and the config file.
    #[arg(short, long)]
    url: Option<String>,

    #[arg(short, long, default_value_t = 0)]
    theme: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = PanelConfig::load()?;
    if let Some(ref url) = args.url {
        config.server.url = parse_base_url(url)?;
    }
    let refresh_interval = Duration::from_secs(config.tui.refresh_interval_secs);
    let client = Arc::new(SpiderClient::new(&config.server));
    let events = EventReader::new(50);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new()));
    if args.theme < theme::THEMES.len() {
        app.lock().await.theme_index = args.theme;
    }

    let mut last_refresh = Instant::now();
    spawn_refresh(Arc::clone(&app), Arc::clone(&client));

    loop {
        {
            let app_guard = app.lock().await;
            terminal.draw(|f| ui::render(f, &app_guard))?;
            if !app_guard.running {
                break;
            }
        }

        match events.next()? {
            AppEvent::Key(key) => {
                let mut app_guard = app.lock().await;

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app_guard.running = false;
                    }
                    KeyCode::Char('r') if !app_guard.confirming_shutdown => {
                        drop(app_guard);
                        spawn_refresh(Arc::clone(&app), Arc::clone(&client));
                        last_refresh = Instant::now();
                    }
                    code => {
                        if let Some(action) = app_guard.handle_key(code) {
                            drop(app_guard);
                            spawn_control(Arc::clone(&app), Arc::clone(&client), action);
                        }
                    }
                }
            }
            AppEvent::Tick => {
                let polling = {
                    let guard = app.lock().await;
                    !guard.shutdown_sent
                };
                if polling && last_refresh.elapsed() >= refresh_interval {
                    spawn_refresh(Arc::clone(&app), Arc::clone(&client));
                    last_refresh = Instant::now();
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn spawn_refresh(app: Arc<Mutex<App>>, client: Arc<SpiderClient>) {
    tokio::spawn(async move {
        let snapshot = client.refresh().await;
        let mut guard = app.lock().await;
        guard.apply_snapshot(snapshot);
    });
}

fn spawn_control(app: Arc<Mutex<App>>, client: Arc<SpiderClient>, action: ControlAction) {
    tokio::spawn(async move {
        let result = match action {
            ControlAction::Query => client.query().await,
            ControlAction::CheckPeers => client.check_peers().await,
            ControlAction::Pause => client.pause().await,
            ControlAction::Resume => client.resume().await,
            ControlAction::Shutdown => client.shutdown().await,
        };
        let mut guard = app.lock().await;
        guard.apply_control_result(action, result.map_err(|e| e.to_string()));
    });
}
