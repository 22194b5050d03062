//! Table of supported hardware targets.
//!
//! Every target is declared once, in the `define_targets!` invocation at the
//! bottom of this module. The invocation generates the [`Target`] enum, the
//! [`TARGETS`] table, and the feature-gated [`ACTIVE_TARGET`] / `INITIAL_SP`
//! pair, so the set of supported targets stays in one place.

use core::fmt;
use core::str::FromStr;

use rtx_common::TargetError;

/// Stack pointer alignment required by the AAPCS at public interfaces.
pub const STACK_ALIGN: u32 = 8;

/// Mbed-style prefix accepted in front of a target symbol.
const SYMBOL_PREFIX: &str = "TARGET_";

/// Static configuration of one hardware target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TargetConfig {
    /// The target this entry describes.
    pub target: Target,
    /// Canonical target symbol, e.g. `APM32F407IG`.
    pub name: &'static str,
    /// Silicon vendor.
    pub vendor: &'static str,
    /// Cargo feature that selects this target.
    pub feature: &'static str,
    /// Top of the main stack, loaded into SP before any code runs.
    pub initial_sp: u32,
}

macro_rules! define_targets {
    ($(
        $(#[$meta:meta])*
        $variant:ident => {
            feature: $feature:tt,
            name: $name:literal,
            vendor: $vendor:literal,
            initial_sp: $sp:literal $(,)?
        }
    ),+ $(,)?) => {
        /// A hardware variant with a known stack layout.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Target {
            $( $(#[$meta])* $variant, )+
        }

        impl Target {
            /// Every supported target, in table order.
            pub const ALL: &'static [Target] = &[$(Target::$variant),+];
        }

        /// Configuration of every supported target, indexed by `Target as usize`.
        pub const TARGETS: &[TargetConfig] = &[$(
            TargetConfig {
                target: Target::$variant,
                name: $name,
                vendor: $vendor,
                feature: $feature,
                initial_sp: $sp,
            }
        ),+];

        $(
            const _: () = {
                let sp: u32 = $sp;
                assert!(
                    sp != 0 && sp % STACK_ALIGN == 0,
                    "initial stack pointer must be non-zero and 8-byte aligned"
                );
            };
        )+

        const SELECTED: usize = 0 $(+ cfg!(feature = $feature) as usize)+;
        const _: () = assert!(SELECTED <= 1, "at most one target feature may be enabled");

        /// The target selected by Cargo feature, or `None` if no target
        /// feature is enabled.
        ///
        /// `INITIAL_SP` only exists when a target is selected; there is no
        /// fallback address for an unrecognized build.
        ///
        $(#[cfg_attr(feature = $feature, doc = "```")])+
        #[cfg_attr(not(any($(feature = $feature),+)), doc = "```compile_fail")]
        /// let sp: u32 = rtx_targets::INITIAL_SP;
        /// assert_eq!(Some(sp), rtx_targets::ACTIVE_TARGET.map(|t| t.config().initial_sp));
        /// ```
        pub const ACTIVE_TARGET: Option<Target> = {
            #[allow(unused_mut)]
            let mut active = None;
            $(
                if cfg!(feature = $feature) {
                    active = Some(Target::$variant);
                }
            )+
            active
        };

        /// Initial stack pointer of the active target.
        #[cfg(any($(feature = $feature),+))]
        pub const INITIAL_SP: u32 = match ACTIVE_TARGET {
            Some(target) => target.config().initial_sp,
            None => panic!("no target selected"),
        };
    };
}

define_targets! {
    /// Geehy APM32F407IG (Cortex-M4F).
    Apm32f407ig => {
        feature: "apm32f407ig",
        name: "APM32F407IG",
        vendor: "Geehy",
        initial_sp: 0x0200_2000,
    },
}

impl Target {
    /// Returns the static configuration of this target.
    pub const fn config(self) -> &'static TargetConfig {
        &TARGETS[self as usize]
    }

    /// Canonical target symbol.
    pub const fn name(self) -> &'static str {
        self.config().name
    }

    /// Cargo feature that selects this target.
    pub const fn feature(self) -> &'static str {
        self.config().feature
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).map(|config| config.target)
    }
}

/// Resolves a target symbol to its configuration.
///
/// Matching ignores ASCII case and accepts an optional `TARGET_` prefix, so
/// `APM32F407IG`, `apm32f407ig` and `TARGET_APM32F407IG` all resolve.
pub fn lookup(symbol: &str) -> Result<&'static TargetConfig, TargetError> {
    let name = strip_prefix(symbol);
    TARGETS
        .iter()
        .find(|config| config.name.eq_ignore_ascii_case(name))
        .ok_or(TargetError::UnknownTarget)
}

fn strip_prefix(symbol: &str) -> &str {
    match symbol.get(..SYMBOL_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(SYMBOL_PREFIX) => {
            &symbol[SYMBOL_PREFIX.len()..]
        }
        _ => symbol,
    }
}
