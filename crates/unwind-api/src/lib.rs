//! HTTP API for the BKT outcome unwind service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};
