//! Terminal file explorer: a numbered menu over a handful of filesystem
//! operations, driven line by line from any `BufRead`.

pub mod core;
pub mod explorer;
pub mod models;
pub mod services;

pub use explorer::{Explorer, ExplorerOptions, MenuProfile, Session};
