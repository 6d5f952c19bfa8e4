//! File Gateway Server
//!
//! A minimal HTTP service exposing store, retrieve, and delete over a flat
//! directory of files. File names resolve to paths under a configured upload
//! root; names that would escape the root are rejected.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;

pub use config::ServerConfig;
pub use error::GatewayError;
pub use server::Server;
