//! sbom-scanner: a static software bill of materials served over HTTP.
//!
//! The daemon (`sbom-scannerd`) serves a fixed component inventory on two
//! read-only JSON endpoints. The `sbom-cli` binary queries a running daemon
//! through [`api_client`].

pub mod api;
pub mod api_client;
pub mod config;
pub mod error;
pub mod inventory;
pub mod server;
pub mod tracing;
