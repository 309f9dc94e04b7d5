//! Process-wide contract configuration.
//!
//! The target runtime is single-threaded, but the configuration lives in
//! a `static`, so it sits behind an `RwLock`. Reads happen only on the
//! violation path, never on the hot path of a successful access.

use std::sync::{PoisonError, RwLock};

use crate::error::ContractViolation;

/// Callback invoked with every violation before execution halts.
///
/// Hooks must not themselves violate a contract; a hook that panics
/// replaces the violation's own panic.
pub type ViolationHook = fn(&ContractViolation);

/// How [`fatal`](crate::contract::fatal) stops execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViolationPolicy {
    /// Panic with the violation's message. Under `panic = "abort"` this
    /// halts immediately; otherwise tests can observe it.
    #[default]
    Panic,
    /// Call `std::process::abort` without unwinding.
    Abort,
}

/// Configuration for contract-violation reporting.
///
/// Installed process-wide with [`install`] and read back with
/// [`current`].
#[derive(Clone, Copy, Debug)]
pub struct ContractConfig {
    /// How execution halts after a violation is reported.
    pub policy: ViolationPolicy,

    /// Whether a `keel:` diagnostic line is written to stderr before
    /// halting. Only honoured in debug builds.
    pub log_diagnostics: bool,

    /// Optional callback run before the diagnostic and the halt.
    pub hook: Option<ViolationHook>,
}

impl ContractConfig {
    /// Default halting policy.
    pub const DEFAULT_POLICY: ViolationPolicy = ViolationPolicy::Panic;

    /// Diagnostics are on by default.
    pub const DEFAULT_LOG_DIAGNOSTICS: bool = true;

    /// Configuration in effect before anything is installed.
    pub const DEFAULT: Self = Self {
        policy: Self::DEFAULT_POLICY,
        log_diagnostics: Self::DEFAULT_LOG_DIAGNOSTICS,
        hook: None,
    };

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Replace the halting policy.
    pub const fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable the stderr diagnostic.
    pub const fn with_log_diagnostics(mut self, enabled: bool) -> Self {
        self.log_diagnostics = enabled;
        self
    }

    /// Install a hook, replacing any previous one.
    pub const fn with_hook(mut self, hook: ViolationHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Remove the hook.
    pub const fn without_hook(mut self) -> Self {
        self.hook = None;
        self
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new()
    }
}

static CONFIG: RwLock<ContractConfig> = RwLock::new(ContractConfig::DEFAULT);

/// Install `config` process-wide, returning the previous configuration.
pub fn install(config: ContractConfig) -> ContractConfig {
    let mut slot = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, config)
}

/// The configuration currently in effect.
pub fn current() -> ContractConfig {
    *CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}
