//! Resolve, download, and install prebuilt `protoc` binaries from the
//! official protobuf GitHub releases.
//!
//! The install pipeline is strictly linear: detect the host platform, resolve
//! the declared version (a `0.0`/`latest` pin resolves over the network),
//! build the release URL, download, extract, and atomically install the
//! binary with executable permissions.

pub mod cli;
pub mod command_handlers;
pub mod config;
pub mod dist;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod install;
pub mod locator;
pub mod pipeline;
pub mod platform;
pub mod retry;
pub mod version;
