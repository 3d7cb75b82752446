//! Strict Semantic Versioning 2.0.0 parsing, validation and precedence comparison
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────────┐
//! │   grammar   │────▶│   Version   │◀────│ serialization │
//! │  (patterns) │     │ (value type)│     │  (serde, str) │
//! └─────────────┘     └─────────────┘     └───────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!            ┌─────────────┐     ┌─────────────┐
//!            │   interop   │     │     cli     │
//!            │  (semver)   │     │  (binary)   │
//!            └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`version`]: the [`Version`] value type
//! - [`error`]: error types for construction, parsing and decoding
//! - [`serialization`]: canonical string encoding and serde support
//! - [`interop`]: conversions to and from [`semver::Version`]
//! - [`cli`], [`config`], [`logging`]: the `strict-semver` command-line tool

pub mod cli;
pub mod config;
pub mod error;
mod grammar;
pub mod interop;
pub mod logging;
pub mod serialization;
pub mod version;

pub use error::{Component, SerializationError, VersionError};
pub use version::Version;
