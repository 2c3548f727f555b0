//! Folio
//!
//! Text front end for the portfolio site: loads the config, wires the
//! adapters and drives the pages from line commands.
//!
//! 作品集站点的文本前端。

pub mod bootstrap;
pub mod shell;

pub use shell::{AppContext, Session, ShellDefaults};
