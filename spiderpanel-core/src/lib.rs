pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;

pub use client::{parse_base_url, PanelSnapshot, SpiderClient};
pub use config::{LoggingConfig, PanelConfig, ServerConfig, TuiConfig};
pub use error::{CliErrorDisplay, PanelError, PanelResult};
pub use model::{
    ControlResponse, ExposedFunction, FunctionDescriptor, ReservationRecord, ServerStatusReport,
};
pub use render::{ArgumentList, FunctionView, StatusView};
pub use state::{PauseControls, PausedState};

/// Exact operator prompt shown before a shutdown request is sent.
pub const SHUTDOWN_PROMPT: &str = "The spider cannot be restarted from the web interface. Continue?";

/// Where to point the operator after a confirmed shutdown.
pub const SHUTDOWN_DOCS: &str = "docs/shutdown";
