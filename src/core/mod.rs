pub mod command;
pub mod counter;
pub mod error;
pub mod logging;
pub mod session;
