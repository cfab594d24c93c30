pub mod control;
pub mod functions;
pub mod reservations;
pub mod status;

pub use control::{cmd_check_peers, cmd_pause, cmd_query, cmd_resume, cmd_shutdown};
pub use functions::cmd_functions;
pub use reservations::{handle_reservations_command, ReservationsCommand};
pub use status::cmd_status;
