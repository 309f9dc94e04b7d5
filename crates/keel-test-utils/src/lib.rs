//! Test utilities and probe types for Keel development.
//!
//! - [`CountingDeleter`]: a disposal policy that counts calls, for
//!   verifying exactly-once disposal.
//! - [`DropLog`] and [`Tracked`]: values that record the order in which
//!   they are dropped.
//! - [`ViolationProbe`] and [`catch_violation`]: observe contract
//!   violations without letting them abort the test binary.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::ptr::NonNull;
use std::rc::Rc;

use keel_core::{config, ContractViolation};
use keel_handle::{Deleter, UniqueHandle};

/// Disposal policy that drops `Box` pointers and counts every call.
///
/// Clones share their counters, so keep a clone to inspect counts after
/// the handle holding the original is gone.
#[derive(Clone, Debug, Default)]
pub struct CountingDeleter {
    disposed: Rc<Cell<usize>>,
    null_calls: Rc<Cell<usize>>,
}

impl CountingDeleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-null objects disposed.
    pub fn disposed(&self) -> usize {
        self.disposed.get()
    }

    /// Number of calls that received `None`.
    pub fn null_calls(&self) -> usize {
        self.null_calls.get()
    }
}

impl<T: ?Sized> Deleter<T> for CountingDeleter {
    unsafe fn dispose(&mut self, ptr: Option<NonNull<T>>) {
        match ptr {
            Some(p) => {
                self.disposed.set(self.disposed.get() + 1);
                // SAFETY: the caller guarantees `p` is an exclusively owned
                // Box pointer.
                drop(unsafe { Box::from_raw(p.as_ptr()) });
            }
            None => self.null_calls.set(self.null_calls.get() + 1),
        }
    }
}

/// Box `value` into a handle with a fresh [`CountingDeleter`], returning
/// the handle and a clone of its deleter for inspection.
pub fn counted<T>(value: T) -> (UniqueHandle<T, CountingDeleter>, CountingDeleter) {
    let deleter = CountingDeleter::new();
    let probe = deleter.clone();
    let raw = Box::into_raw(Box::new(value));
    // SAFETY: `raw` is a fresh Box pointer owned by nobody else.
    let handle = unsafe { UniqueHandle::from_raw_with_deleter(raw, deleter) };
    (handle, probe)
}

/// Shared record of drop order.
#[derive(Clone, Debug, Default)]
pub struct DropLog {
    order: Rc<RefCell<Vec<u32>>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value that appends `id` to this log when dropped.
    pub fn tracked(&self, id: u32) -> Tracked {
        Tracked {
            id,
            log: self.clone(),
        }
    }

    /// Ids in the order their values were dropped.
    pub fn order(&self) -> Vec<u32> {
        self.order.borrow().clone()
    }

    /// Number of values dropped so far.
    pub fn len(&self) -> usize {
        self.order.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.borrow().is_empty()
    }
}

/// A value that records its own drop in a [`DropLog`].
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    log: DropLog,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.log.tracked(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.order.borrow_mut().push(self.id);
    }
}

thread_local! {
    static SEEN: Cell<usize> = const { Cell::new(0) };
    static LAST: Cell<Option<ContractViolation>> = const { Cell::new(None) };
}

fn record(violation: &ContractViolation) {
    SEEN.with(|c| c.set(c.get() + 1));
    LAST.with(|l| l.set(Some(*violation)));
}

/// Counts contract violations raised on the current thread.
///
/// Installing the probe sets a process-wide hook, but the counters are
/// thread-local, so tests running in parallel never see each other's
/// violations.
#[derive(Debug)]
pub struct ViolationProbe {
    baseline: usize,
}

impl ViolationProbe {
    /// Install the recording hook and start counting from zero.
    pub fn install() -> Self {
        config::install(config::current().with_hook(record));
        Self {
            baseline: SEEN.with(Cell::get),
        }
    }

    /// Violations raised on this thread since the probe was installed.
    pub fn count(&self) -> usize {
        SEEN.with(Cell::get) - self.baseline
    }

    /// The most recent violation raised on this thread, if any.
    pub fn last(&self) -> Option<ContractViolation> {
        if self.count() == 0 {
            None
        } else {
            LAST.with(Cell::get)
        }
    }
}

/// Run `f`, returning the contract violation it raised instead of
/// unwinding. Panics that are not contract violations are resumed.
pub fn catch_violation<R>(f: impl FnOnce() -> R) -> Result<R, ContractViolation> {
    let probe = ViolationProbe::install();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match probe.last() {
            Some(violation) => Err(violation),
            None => panic::resume_unwind(payload),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_deleter_counts_disposals_and_nulls() {
        let (mut handle, probe) = counted(5);
        handle.reset();
        assert_eq!(probe.disposed(), 1);
        drop(handle);
        assert_eq!(probe.disposed(), 1);
        assert_eq!(probe.null_calls(), 1);
    }

    #[test]
    fn drop_log_records_order() {
        let log = DropLog::new();
        let a = log.tracked(1);
        let b = log.tracked(2);
        drop(b);
        drop(a);
        assert_eq!(log.order(), vec![2, 1]);
    }

    #[test]
    fn catch_violation_returns_violation() {
        let result = catch_violation(|| keel_core::fatal(ContractViolation::NullDereference));
        assert_eq!(result, Err(ContractViolation::NullDereference));
    }

    #[test]
    fn catch_violation_passes_through_success() {
        assert_eq!(catch_violation(|| 3), Ok(3));
    }

    #[test]
    #[should_panic(expected = "unrelated")]
    fn catch_violation_resumes_other_panics() {
        let _ = catch_violation(|| panic!("unrelated"));
    }

    #[test]
    fn probe_counts_per_thread() {
        let probe = ViolationProbe::install();
        let _ = catch_violation(|| keel_core::fatal(ContractViolation::NullDereference));
        assert_eq!(probe.count(), 1);
        assert_eq!(probe.last(), Some(ContractViolation::NullDereference));
    }
}
