//! Registration lifecycle of the Easter provider.

use std::sync::Arc;

use almanac_core::errors::Result;
use tracing::info;

use crate::easter_almanac::EasterAlmanac;
use crate::provider::{AlmanacProvider, AlmanacRegistry};

/// Keeps an [`EasterAlmanac`] registered in an [`AlmanacRegistry`].
///
/// Construction inserts the provider at the front of the registry so that it
/// is asked before any provider registered earlier; [`EasterService::shut_down`]
/// removes that same instance again.
#[derive(Debug)]
pub struct EasterService {
    registry: Arc<AlmanacRegistry>,
    provider: Arc<dyn AlmanacProvider>,
}

impl EasterService {
    /// Register `almanac` at the front of `registry`.
    pub fn new(registry: Arc<AlmanacRegistry>, almanac: EasterAlmanac) -> Self {
        info!(
            calendar = %almanac.calendar(),
            hour = almanac.hour(),
            "registering Easter almanac"
        );
        let provider: Arc<dyn AlmanacProvider> = Arc::new(almanac);
        registry.insert(0, Arc::clone(&provider));
        Self { registry, provider }
    }

    /// The registered provider instance.
    pub fn provider(&self) -> &Arc<dyn AlmanacProvider> {
        &self.provider
    }

    /// Remove the provider from the registry.
    pub fn shut_down(self) -> Result<()> {
        self.registry.remove(&self.provider)?;
        info!("Easter almanac deregistered");
        Ok(())
    }
}
