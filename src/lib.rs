//! Vintage - a Vim-style modal editing core
//!
//! Mode tracking, key binding context queries, ex command parsing and
//! execution, and the run-control file, behind a small host interface.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod ex;
pub mod focus;
pub mod host;
pub mod logging;
pub mod mode;
pub mod rc;
pub mod test_utils;
