//! Text front end: config interpretation, app state, commands and rendering.

pub mod command;
pub mod context;
pub mod defaults;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use context::AppContext;
pub use defaults::ShellDefaults;
pub use session::{Reply, Session};
