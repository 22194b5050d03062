//! Stack pointer setup for early startup code.
//!
//! Startup code owns the actual register write; these helpers pick and check
//! the value and hand it to an [`StackPointer`] implementation.

use log::{debug, error, warn};
use rtx_common::TargetError;
use rtx_hal::StackPointer;

use crate::targets::{TargetConfig, ACTIVE_TARGET, STACK_ALIGN};

/// Checks that a target's initial stack pointer is usable.
///
/// Returns the address on success.
pub fn validate(config: &TargetConfig) -> Result<u32, TargetError> {
    let sp = config.initial_sp;
    if sp == 0 {
        return Err(TargetError::NullStack);
    }
    if sp % STACK_ALIGN != 0 {
        return Err(TargetError::MisalignedStack { sp });
    }
    Ok(sp)
}

/// Loads `config`'s initial stack pointer into `cpu`.
///
/// The register is left untouched if the value fails [`validate`].
pub fn load_initial_sp<S: StackPointer>(
    cpu: &mut S,
    config: &TargetConfig,
) -> Result<(), TargetError> {
    let sp = validate(config).map_err(|e| {
        error!("{}: {}", config.name, e);
        e
    })?;
    debug!("{}: initial SP = {:#010x}", config.name, sp);
    cpu.set_main_stack_pointer(sp);
    Ok(())
}

/// Loads the active target's initial stack pointer into `cpu`.
pub fn load_active<S: StackPointer>(cpu: &mut S) -> Result<(), TargetError> {
    let Some(target) = ACTIVE_TARGET else {
        warn!("no target feature enabled; stack pointer not loaded");
        return Err(TargetError::NoTargetSelected);
    };
    load_initial_sp(cpu, target.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::Target;

    #[derive(Default)]
    struct MockCpu {
        sp: u32,
        writes: usize,
    }

    impl StackPointer for MockCpu {
        fn set_main_stack_pointer(&mut self, sp: u32) {
            self.sp = sp;
            self.writes += 1;
        }

        fn main_stack_pointer(&self) -> u32 {
            self.sp
        }
    }

    fn with_sp(initial_sp: u32) -> TargetConfig {
        TargetConfig {
            initial_sp,
            ..*Target::Apm32f407ig.config()
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(Target::Apm32f407ig.config()), Ok(0x2002000));
        assert_eq!(validate(&with_sp(0)), Err(TargetError::NullStack));
        assert_eq!(
            validate(&with_sp(0x2000_0004)),
            Err(TargetError::MisalignedStack { sp: 0x2000_0004 })
        );
    }

    #[test]
    fn test_load_initial_sp() {
        let mut cpu = MockCpu::default();
        load_initial_sp(&mut cpu, Target::Apm32f407ig.config()).unwrap();
        assert_eq!(cpu.main_stack_pointer(), 0x2002000);
        assert_eq!(cpu.writes, 1);
    }

    #[test]
    fn test_load_rejects_bad_sp() {
        let mut cpu = MockCpu::default();
        assert_eq!(load_initial_sp(&mut cpu, &with_sp(0)), Err(TargetError::NullStack));
        assert!(load_initial_sp(&mut cpu, &with_sp(0x2002001)).is_err());
        assert_eq!(cpu.writes, 0);
    }

    #[cfg(not(feature = "apm32f407ig"))]
    #[test]
    fn test_load_active_without_target() {
        let mut cpu = MockCpu::default();
        assert_eq!(load_active(&mut cpu), Err(TargetError::NoTargetSelected));
        assert_eq!(cpu.writes, 0);
    }

    #[cfg(feature = "apm32f407ig")]
    #[test]
    fn test_load_active() {
        let mut cpu = MockCpu::default();
        load_active(&mut cpu).unwrap();
        assert_eq!(cpu.main_stack_pointer(), crate::INITIAL_SP);
    }
}
