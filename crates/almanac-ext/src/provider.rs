//! `AlmanacProvider` trait and the ordered `AlmanacRegistry`.
//!
//! A registry is a list of providers.  A query walks the list front to back;
//! a provider that does not know the attribute answers
//! [`Error::UnknownAttribute`] and the next one is asked.  Inserting at the
//! front therefore lets a provider override the ones already registered.

use std::sync::{Arc, OnceLock, RwLock};

use almanac_core::errors::{Error, Result};
use tracing::{debug, trace};

use crate::almanac::Almanac;
use crate::value::TimeValue;

/// A source of almanac attributes.
pub trait AlmanacProvider: std::fmt::Debug + Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Answer `attr` for `almanac`.
    ///
    /// Must return [`Error::UnknownAttribute`] for attributes this provider
    /// does not supply.
    fn get_almanac_data(&self, almanac: &Almanac, attr: &str) -> Result<TimeValue>;
}

/// Ordered list of almanac providers.
#[derive(Debug, Default)]
pub struct AlmanacRegistry {
    providers: RwLock<Vec<Arc<dyn AlmanacProvider>>>,
}

static GLOBAL: OnceLock<Arc<AlmanacRegistry>> = OnceLock::new();

fn same_provider(a: &Arc<dyn AlmanacProvider>, b: &Arc<dyn AlmanacProvider>) -> bool {
    // Compare data pointers only; vtable pointers are not unique.
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

impl AlmanacRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide registry.
    pub fn global() -> Arc<AlmanacRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(AlmanacRegistry::new())))
    }

    /// Insert `provider` at `index` (clamped to the current length).
    pub fn insert(&self, index: usize, provider: Arc<dyn AlmanacProvider>) {
        let mut providers = self.providers.write().expect("almanac registry lock poisoned");
        let index = index.min(providers.len());
        debug!(provider = provider.name(), index, "inserting almanac provider");
        providers.insert(index, provider);
    }

    /// Append `provider` at the end.
    pub fn push(&self, provider: Arc<dyn AlmanacProvider>) {
        let mut providers = self.providers.write().expect("almanac registry lock poisoned");
        debug!(provider = provider.name(), index = providers.len(), "appending almanac provider");
        providers.push(provider);
    }

    /// Position of this exact provider instance.
    pub fn position(&self, provider: &Arc<dyn AlmanacProvider>) -> Option<usize> {
        self.providers
            .read()
            .expect("almanac registry lock poisoned")
            .iter()
            .position(|p| same_provider(p, provider))
    }

    /// Remove this exact provider instance.
    pub fn remove(&self, provider: &Arc<dyn AlmanacProvider>) -> Result<Arc<dyn AlmanacProvider>> {
        let mut providers = self.providers.write().expect("almanac registry lock poisoned");
        match providers.iter().position(|p| same_provider(p, provider)) {
            Some(index) => {
                debug!(provider = provider.name(), index, "removing almanac provider");
                Ok(providers.remove(index))
            }
            None => Err(Error::ProviderNotRegistered(provider.name().to_string())),
        }
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.read().expect("almanac registry lock poisoned").len()
    }

    /// Return `true` if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Provider names in query order.
    pub fn names(&self) -> Vec<String> {
        self.providers
            .read()
            .expect("almanac registry lock poisoned")
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Ask each provider in turn for `attr`.
    ///
    /// The first answer that is not [`Error::UnknownAttribute`] is returned,
    /// whether it is a value or another error.  If nobody knows the attribute the
    /// result is [`Error::UnknownAttribute`].
    pub fn query(&self, almanac: &Almanac, attr: &str) -> Result<TimeValue> {
        // Snapshot so providers run without the lock held.
        let providers = self
            .providers
            .read()
            .expect("almanac registry lock poisoned")
            .clone();
        for provider in &providers {
            match provider.get_almanac_data(almanac, attr) {
                Err(e) if e.is_unknown_attribute() => {
                    trace!(provider = provider.name(), attr, "attribute not provided");
                }
                result => {
                    debug!(provider = provider.name(), attr, ok = result.is_ok(), "almanac query answered");
                    return result;
                }
            }
        }
        debug!(attr, "no almanac provider knows attribute");
        Err(Error::UnknownAttribute(attr.to_string()))
    }
}
