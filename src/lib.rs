//! emograph — per-person emotion timelines and the static server that hosts
//! the report page.
//!
//! Two independent components share this library:
//! - the report generator: fetch conversation records, aggregate emotion
//!   counts by date, emit chart-ready JSON ([`client`], [`aggregate`],
//!   [`chart`]);
//! - the static asset server: resolve request paths to files under a
//!   document root ([`server`], [`handler`], [`http`]).

pub mod aggregate;
pub mod chart;
pub mod client;
pub mod config;
pub mod emotion;
pub mod handler;
pub mod http;
pub mod logger;
pub mod records;
pub mod server;
