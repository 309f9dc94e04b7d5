//! The contract-violation funnel.
//!
//! All precondition checks in Keel end here. [`check_index`] is the
//! non-fatal form used by `try_*` accessors; [`fatal`] reports a
//! violation according to the installed [`ContractConfig`] and never
//! returns.
//!
//! [`ContractConfig`]: crate::config::ContractConfig

use crate::config::{self, ViolationPolicy};
use crate::error::ContractViolation;

/// Check that `index` addresses one of `len` elements.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), ContractViolation> {
    if index < len {
        Ok(())
    } else {
        Err(ContractViolation::IndexOutOfBounds { index, len })
    }
}

/// Report `violation` and halt.
///
/// Runs the configured hook, writes a diagnostic in debug builds when
/// enabled, then stops execution according to the configured
/// [`ViolationPolicy`]. Kept out of line so the checked fast paths stay
/// small.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(violation: ContractViolation) -> ! {
    let config = config::current();

    if let Some(hook) = config.hook {
        hook(&violation);
    }

    #[cfg(debug_assertions)]
    if config.log_diagnostics {
        let location = std::panic::Location::caller();
        eprintln!(
            "keel: contract violation ({}) at {}:{}: {}",
            violation.kind(),
            location.file(),
            location.line(),
            violation,
        );
    }

    match config.policy {
        ViolationPolicy::Panic => panic!("{violation}"),
        ViolationPolicy::Abort => std::process::abort(),
    }
}

/// Unwrap a checked result, reporting the violation fatally on error.
#[inline]
#[track_caller]
pub fn expect_ok<T>(result: Result<T, ContractViolation>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => fatal(violation),
    }
}
