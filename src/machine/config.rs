use std::fmt;
use std::sync::Arc;

use super::{Builtins, LocationProvider};

/// How `==/2` and `\==/2` treat two unbound variables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VarIdentity {
    /// Raise a variable unification error.
    #[default]
    Reject,
    /// Compare the variables by their engine identity.
    ByIndex,
}

impl VarIdentity {
    pub fn is_reject(self) -> bool {
        matches!(self, VarIdentity::Reject)
    }
}

/// The default for [`Flags::max_generated`].
pub const DEFAULT_MAX_GENERATED: usize = 1 << 20;

/// Behavioural flags of the built-in library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// See [`VarIdentity`].
    pub var_identity: VarIdentity,
    /// The most terms one call may generate: the solutions of `between/3`,
    /// the cells built by `length/2`, the arguments built by `functor/3`.
    pub max_generated: usize,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            var_identity: VarIdentity::default(),
            max_generated: DEFAULT_MAX_GENERATED,
        }
    }
}

pub(crate) type SharedLocationProvider = Arc<dyn LocationProvider + Send + Sync>;

/// Describes how a [`Builtins`] will be configured.
#[derive(Default)]
pub struct BuiltinsBuilder {
    pub(crate) flags: Flags,
    pub(crate) locations: Option<SharedLocationProvider>,
}

impl fmt::Debug for BuiltinsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinsBuilder")
            .field("flags", &self.flags)
            .field("locations", &self.locations.as_ref().map(|_| "<provider>"))
            .finish()
    }
}

impl BuiltinsBuilder {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses the given [`Flags`] in this configuration.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Decorates errors with positions looked up in `provider`.
    pub fn with_locations(mut self, provider: impl LocationProvider + Send + Sync + 'static) -> Self {
        self.locations = Some(Arc::new(provider));
        self
    }

    /// Builds the [`Builtins`] from this configuration.
    pub fn build(self) -> Builtins {
        Builtins {
            flags: self.flags,
            locations: self.locations,
        }
    }
}
