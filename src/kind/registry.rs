//! Catalog of registered kinds.
//!
//! A [`Registry`] indexes kinds by code and by name and refuses duplicates.
//! The process-wide registry has two phases:
//!
//! 1. **Open**: during startup, [`register`] adds application kinds on top of
//!    the built-in taxonomy. Registration is serialized by a mutex.
//! 2. **Frozen**: the first read ([`registry`], [`get_by_code`], DTO decoding,
//!    ...) or an explicit [`freeze`] publishes the registry. Reads are
//!    lock-free from then on and any further [`register`] call panics.
//!
//! ```
//! use error_kind::kind::{self, Kind, SYSTEM_ERROR};
//!
//! static QUEUE_FULL: Kind = Kind::new("QueueFullError", "Q00001").with_parent(&SYSTEM_ERROR);
//!
//! let mut registry = kind::Registry::with_builtin_kinds();
//! registry.register(&[&QUEUE_FULL]);
//!
//! assert!(core::ptr::eq(registry.get_by_code("Q00001"), &QUEUE_FULL));
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::{Kind, BUILTIN_KINDS};

/// Contract violation reported by [`Registry::try_register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another kind already uses this code.
    DuplicateCode { code: &'static str, existing: &'static str, rejected: &'static str },
    /// Another kind already uses this name.
    DuplicateName { name: &'static str },
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateCode { code, existing, rejected } => write!(
                f,
                "kind code `{code}` of `{rejected}` is already registered by `{existing}`"
            ),
            Self::DuplicateName { name } => write!(f, "kind name `{name}` is already registered"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Kinds indexed by code and by name.
#[derive(Debug, Default)]
pub struct Registry {
    kinds: Vec<&'static Kind>,
    by_code: BTreeMap<&'static str, &'static Kind>,
    by_name: BTreeMap<&'static str, &'static Kind>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { kinds: Vec::new(), by_code: BTreeMap::new(), by_name: BTreeMap::new() }
    }

    /// Creates a registry holding the built-in taxonomy.
    #[must_use]
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        registry.register(&BUILTIN_KINDS);
        registry
    }

    /// Registers every kind, panicking on the first duplicate code or name.
    ///
    /// # Panics
    ///
    /// Duplicates are programming errors and abort startup.
    pub fn register(&mut self, kinds: &[&'static Kind]) {
        if let Err(err) = self.try_register(kinds) {
            panic!("invalid kind registration: {err}");
        }
    }

    /// Registers every kind, stopping at the first duplicate.
    ///
    /// Kinds before the offending one stay registered.
    pub fn try_register(&mut self, kinds: &[&'static Kind]) -> Result<(), RegistryError> {
        for &kind in kinds {
            self.insert(kind)?;
        }
        Ok(())
    }

    fn insert(&mut self, kind: &'static Kind) -> Result<(), RegistryError> {
        if let Some(existing) = self.by_code.get(kind.code()) {
            return Err(RegistryError::DuplicateCode {
                code: kind.code(),
                existing: existing.name(),
                rejected: kind.name(),
            });
        }
        if self.by_name.contains_key(kind.name()) {
            return Err(RegistryError::DuplicateName { name: kind.name() });
        }

        self.by_code.insert(kind.code(), kind);
        self.by_name.insert(kind.name(), kind);
        self.kinds.push(kind);
        Ok(())
    }

    #[inline]
    pub fn find_by_code(&self, code: &str) -> Option<&'static Kind> {
        self.by_code.get(code).copied()
    }

    #[inline]
    pub fn find_by_name(&self, name: &str) -> Option<&'static Kind> {
        self.by_name.get(name).copied()
    }

    /// # Panics
    ///
    /// Panics when no kind uses `code`.
    pub fn get_by_code(&self, code: &str) -> &'static Kind {
        match self.find_by_code(code) {
            Some(kind) => kind,
            None => panic!("unregistered kind code `{code}`"),
        }
    }

    /// # Panics
    ///
    /// Panics when no kind uses `name`.
    pub fn get_by_name(&self, name: &str) -> &'static Kind {
        match self.find_by_name(name) {
            Some(kind) => kind,
            None => panic!("unregistered kind name `{name}`"),
        }
    }

    /// Returns `true` when this exact kind (not just its code) is registered.
    pub fn contains(&self, kind: &Kind) -> bool {
        self.find_by_code(kind.code())
            .is_some_and(|registered| core::ptr::eq(registered, kind))
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static Kind> + '_ {
        self.kinds.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

enum Phase {
    /// Nothing registered yet; built-ins are added on first use.
    Unseeded,
    Open(Registry),
    Frozen,
}

static OPEN: Mutex<Phase> = Mutex::new(Phase::Unseeded);
static FROZEN: OnceLock<Registry> = OnceLock::new();

/// Registers application kinds in the process-wide registry.
///
/// # Panics
///
/// Panics on duplicates and when the registry has already been frozen.
pub fn register(kinds: &[&'static Kind]) {
    let mut phase = OPEN.lock().unwrap_or_else(PoisonError::into_inner);
    match &mut *phase {
        Phase::Frozen => panic!("kind registry is frozen; register kinds during startup"),
        Phase::Open(registry) => registry.register(kinds),
        Phase::Unseeded => {
            let mut registry = Registry::with_builtin_kinds();
            registry.register(kinds);
            *phase = Phase::Open(registry);
        },
    }
}

/// Ends the registration phase. Calling it more than once is harmless.
pub fn freeze() {
    let _ = registry();
}

/// Returns the process-wide registry, freezing it on first call.
pub fn registry() -> &'static Registry {
    FROZEN.get_or_init(|| {
        let mut phase = OPEN.lock().unwrap_or_else(PoisonError::into_inner);
        let registry = match core::mem::replace(&mut *phase, Phase::Frozen) {
            Phase::Open(registry) => registry,
            Phase::Unseeded | Phase::Frozen => Registry::with_builtin_kinds(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(kinds = registry.len(), "kind registry frozen");

        registry
    })
}

/// Looks up a kind by code in the process-wide registry.
///
/// # Panics
///
/// Panics when the code is not registered.
#[inline]
pub fn get_by_code(code: &str) -> &'static Kind {
    registry().get_by_code(code)
}

/// Looks up a kind by name in the process-wide registry.
///
/// # Panics
///
/// Panics when the name is not registered.
#[inline]
pub fn get_by_name(name: &str) -> &'static Kind {
    registry().get_by_name(name)
}

#[inline]
pub fn find_by_code(code: &str) -> Option<&'static Kind> {
    registry().find_by_code(code)
}

#[inline]
pub fn find_by_name(name: &str) -> Option<&'static Kind> {
    registry().find_by_name(name)
}
