pub mod functions;
pub mod help;
pub mod status;
