//! Generic factory dispatch.
//!
//! One [`Registry`] instance exists per domain-object kind (section,
//! table, entity).  A registry maps a discriminator string to a
//! constructor function and falls back to a default constructor for
//! discriminators it has never seen, so undocumented or vendor-specific
//! extension types degrade to a generic representation instead of
//! failing the parse.

use crate::error::Result;
use crate::record::DxfRecord;
use ahash::AHashMap;

/// A constructor invoked with the full record list of one block.
pub type Factory<T> = fn(&[DxfRecord]) -> Result<T>;

/// Discriminator-to-constructor mapping with a default fallback.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    factories: AHashMap<String, Factory<T>>,
    default_factory: Factory<T>,
}

impl<T> Registry<T> {
    /// Create a registry with only the default constructor.
    pub fn new(default_factory: Factory<T>) -> Self {
        Self {
            factories: AHashMap::new(),
            default_factory,
        }
    }

    /// Register a constructor for a discriminator.  Registering the same
    /// discriminator again replaces the previous constructor.
    pub fn register(&mut self, discriminator: impl Into<String>, factory: Factory<T>) {
        self.factories.insert(discriminator.into(), factory);
    }

    /// Look up the constructor for a discriminator, falling back to the
    /// default constructor when unregistered.
    pub fn factory_for(&self, discriminator: &str) -> Factory<T> {
        self.factories
            .get(discriminator)
            .copied()
            .unwrap_or(self.default_factory)
    }

    /// Construct an object from `records`, dispatching on `discriminator`.
    ///
    /// Structural validation (minimum length, opener/terminator checks)
    /// is the responsibility of the per-kind entry point that extracts
    /// the discriminator; constructors may assume it has been done.
    pub fn construct(&self, discriminator: &str, records: &[DxfRecord]) -> Result<T> {
        self.factory_for(discriminator)(records)
    }

    /// Number of registered discriminators (excluding the default).
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no discriminators are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
