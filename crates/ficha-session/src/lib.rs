//! The adventure session: the one owner of the sheet, the roster and the
//! dice tray.
//!
//! Every mutation goes through [`AdventureSession`], which applies the pure
//! update from `ficha-core` and immediately persists the whole aggregate.
//! Frontends drive it either through typed methods or through the
//! line-oriented [`AdventureSession::process`] interpreter.

pub mod config;
pub mod confirm;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use confirm::{Confirm, RESET_PROMPT};
pub use error::{SessionError, SessionResult};
pub use session::{AdventureSession, MAX_DICE};
