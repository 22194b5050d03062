//! Initial stack pointer configuration for rtx hardware targets.
//!
//! The active target is picked with a Cargo feature (for example
//! `apm32f407ig`). With a target selected, `INITIAL_SP` holds the address
//! startup code loads into the main stack pointer before anything else runs.
//! Without one, `INITIAL_SP` is not defined at all and any code that needs it
//! fails to build.
//!
//! # Modules
//!
//! - `targets`: the table of supported targets and the active selection
//! - `startup`: helpers that program the stack pointer through [`rtx_hal`]

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod startup;
pub mod targets;

pub use rtx_common::TargetError;
pub use targets::*;
