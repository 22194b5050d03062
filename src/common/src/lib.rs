//! Types shared across the rtx crates.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod error;

pub use error::TargetError;
