use crossterm::event::KeyCode;
use spiderpanel_core::{
    ExposedFunction, PanelSnapshot, PausedState, StatusView, SHUTDOWN_DOCS,
};

use crate::theme::{Theme, THEMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Status,
    Functions,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Status, Tab::Functions, Tab::Help]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Status => "Status",
            Tab::Functions => "Functions",
            Tab::Help => "Help",
        }
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Tab {
        Tab::all().get(i).copied().unwrap_or(Tab::Status)
    }

    pub fn from_key(c: char) -> Option<Tab> {
        match c {
            '1' => Some(Tab::Status),
            '2' => Some(Tab::Functions),
            '3' => Some(Tab::Help),
            _ => None,
        }
    }
}

/// A control submission requested through the keyboard. The event loop
/// spawns the matching client call and feeds the result back through
/// [`App::apply_control_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Query,
    CheckPeers,
    Pause,
    Resume,
    Shutdown,
}

pub struct App {
    pub running: bool,
    pub current_tab: Tab,
    pub theme_index: usize,
    pub scroll_offset: usize,

    pub paused: PausedState,
    pub status: StatusView,
    pub functions: Vec<ExposedFunction>,
    pub connected: bool,
    pub last_error: Option<String>,
    pub status_message: Option<String>,

    /// Shutdown confirmation dialog visible; no request is sent until the
    /// operator answers yes.
    pub confirming_shutdown: bool,
    /// The server accepted a shutdown; polling stops.
    pub shutdown_sent: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_tab: Tab::Status,
            theme_index: 0,
            scroll_offset: 0,

            paused: PausedState::default(),
            status: StatusView::default(),
            functions: Vec::new(),
            connected: false,
            last_error: None,
            status_message: None,

            confirming_shutdown: false,
            shutdown_sent: false,
        }
    }

    pub fn theme(&self) -> &Theme {
        &THEMES[self.theme_index]
    }

    pub fn next_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % THEMES.len();
    }

    pub fn next_tab(&mut self) {
        let idx = (self.current_tab.index() + 1) % Tab::all().len();
        self.switch_tab(Tab::from_index(idx));
    }

    pub fn prev_tab(&mut self) {
        let idx = if self.current_tab.index() == 0 {
            Tab::all().len() - 1
        } else {
            self.current_tab.index() - 1
        };
        self.switch_tab(Tab::from_index(idx));
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Fold one polling pass into the app. Regions only change for fields
    /// the server actually sent; a failed fetch changes nothing but the
    /// connection indicator.
    pub fn apply_snapshot(&mut self, snapshot: PanelSnapshot) {
        self.connected = snapshot.connected;
        self.last_error = snapshot.error;

        if let Some(report) = snapshot.status {
            if let Some(paused) = report.paused {
                self.paused.apply_report(paused);
            }
            self.status.update(&report);
        }
        if let Some(functions) = snapshot.functions {
            self.functions = functions;
        }
    }

    /// Translate a key press into an optional control submission, honoring
    /// the confirmation dialog and the pause/resume enablement rules.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<ControlAction> {
        if self.confirming_shutdown {
            return match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirming_shutdown = false;
                    Some(ControlAction::Shutdown)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirming_shutdown = false;
                    self.status_message = Some("Shutdown cancelled.".to_string());
                    None
                }
                _ => None,
            };
        }

        match code {
            KeyCode::Char('q') => {
                self.running = false;
                None
            }
            KeyCode::Tab => {
                self.next_tab();
                None
            }
            KeyCode::BackTab => {
                self.prev_tab();
                None
            }
            KeyCode::Char(c) if Tab::from_key(c).is_some() => {
                self.switch_tab(Tab::from_key(c).unwrap());
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_down();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_up();
                None
            }
            KeyCode::Char('t') => {
                self.next_theme();
                None
            }
            KeyCode::Char('p') if self.paused.controls().pause_enabled => {
                Some(ControlAction::Pause)
            }
            KeyCode::Char('u') if self.paused.controls().resume_enabled => {
                Some(ControlAction::Resume)
            }
            KeyCode::Char('f') => Some(ControlAction::Query),
            KeyCode::Char('c') => Some(ControlAction::CheckPeers),
            KeyCode::Char('s') => {
                self.confirming_shutdown = true;
                None
            }
            _ => None,
        }
    }

    /// Apply the outcome of a spawned control submission.
    pub fn apply_control_result(&mut self, action: ControlAction, result: Result<(), String>) {
        match result {
            Ok(()) => match action {
                ControlAction::Pause => {
                    self.paused.enter_paused();
                    self.status_message = Some("Spider paused.".to_string());
                }
                ControlAction::Resume => {
                    self.paused.enter_running();
                    self.status_message = Some("Spider resumed.".to_string());
                }
                ControlAction::Shutdown => {
                    self.shutdown_sent = true;
                    self.status_message =
                        Some(format!("Shutdown accepted. See {}.", SHUTDOWN_DOCS));
                }
                ControlAction::Query => {
                    self.status_message = Some("Query pass requested.".to_string());
                }
                ControlAction::CheckPeers => {
                    self.status_message = Some("Peer check requested.".to_string());
                }
            },
            Err(message) => {
                self.status_message = Some(format!("Error: {}", message));
            }
        }
    }
}
