//! Error types for target configuration.

use core::fmt;

/// Target configuration error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TargetError {
    /// Symbol does not name a supported target
    UnknownTarget,
    /// No target feature enabled in this build
    NoTargetSelected,
    /// Stack pointer is zero
    NullStack,
    /// Stack pointer is not 8-byte aligned
    MisalignedStack {
        /// The rejected address.
        sp: u32,
    },
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::UnknownTarget => write!(f, "unknown target"),
            TargetError::NoTargetSelected => write!(f, "no target selected"),
            TargetError::NullStack => write!(f, "initial stack pointer is null"),
            TargetError::MisalignedStack { sp } => {
                write!(f, "initial stack pointer {:#x} is not 8-byte aligned", sp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TargetError::UnknownTarget.to_string(), "unknown target");
        assert_eq!(
            TargetError::MisalignedStack { sp: 0x2000_0004 }.to_string(),
            "initial stack pointer 0x20000004 is not 8-byte aligned"
        );
    }
}
