//! Platform-agnostic counter state shared by every counter screen.
//!
//! A screen owns one [`CounterStore`], forwards button taps to it and
//! re-renders from the value delivered to its [`Observer`].

pub mod core;


pub use crate::core::command::Command;
pub use crate::core::counter::{Accent, CounterStore, Observer, Presentation};
pub use crate::core::error::{CommandError, SessionError};
pub use crate::core::logging::open_log_appender;
pub use crate::core::session::{OutputFormat, Session};
