pub mod commands;
pub mod io;
pub mod telemetry;
