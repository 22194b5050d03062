//! Hardware Abstraction Layer (HAL) traits for rtx targets.
//!
//! This crate defines traits that abstract away platform-specific hardware details.

#![cfg_attr(not(test), no_std)]

/// Trait for the core's main stack pointer register.
///
/// Startup code implements this for the real register; the target
/// configuration only decides which value gets written.
pub trait StackPointer {
    /// Loads `sp` into the main stack pointer.
    fn set_main_stack_pointer(&mut self, sp: u32);
    /// Reads the current main stack pointer.
    fn main_stack_pointer(&self) -> u32;
}
