//! typebind compiler: hierarchy passes and TypeScript declaration emission.
//!
//! This crate turns a [`TypeTable`](typebind_core::TypeTable) into
//! declaration files:
//! - `passes` - overload copy-down, flattening, doc propagation, conflict
//!   resolution, root-type closure
//! - `typegen` - TypeScript declaration rendering
//! - `partition` - module grouping and output units
//! - `pipeline` - the driver threading a [`Config`] through all of the above

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
pub mod partition;
pub mod passes;
mod pipeline;
pub mod typegen;
mod whitelist;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod partition_tests;
#[cfg(test)]
mod whitelist_tests;

pub use config::Config;
pub use partition::OutputUnit;
pub use pipeline::Pipeline;
pub use whitelist::MethodWhitelist;

/// Errors raised while configuring the pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("invalid method whitelist pattern `{pattern}`: {message}")]
    InvalidWhitelistPattern { pattern: String, message: String },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
