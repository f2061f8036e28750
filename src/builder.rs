//! Builder for configuring and constructing a `Monitor`.

use midiscope_decode::{Decoder, DeviceFamilyRegistry, FamilyTable};
use midiscope_session::{ImportMode, MessageFilters, MonitorSession, SessionConfig};

use crate::{Monitor, Result};

/// # Example
///
/// ```
/// use midiscope::prelude::*;
///
/// let monitor = Monitor::builder()
///     .filters(MessageFilters { other: false, ..MessageFilters::all() })
///     .identity_device_id(0x10)
///     .build()?;
/// # Ok::<(), midiscope::Error>(())
/// ```
pub struct MonitorBuilder {
    config: SessionConfig,
    families: DeviceFamilyRegistry,
}

impl Default for MonitorBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            families: DeviceFamilyRegistry::builtin(),
        }
    }
}

impl MonitorBuilder {
    /// Replaces every setting made so far except device families.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: everything visible
    pub fn filters(mut self, filters: MessageFilters) -> Self {
        self.config.filters = filters;
        self
    }

    /// Default: 0x7F (all devices). Checked in `build()`.
    pub fn identity_device_id(mut self, device_id: u8) -> Self {
        self.config.identity_device_id = device_id;
        self
    }

    /// Default: merge
    pub fn import_mode(mut self, mode: ImportMode) -> Self {
        self.config.default_import_mode = mode;
        self
    }

    /// Name the members of a vendor's device family in Identity Replies.
    pub fn device_family(mut self, manufacturer_id: u8, family: u16, table: FamilyTable) -> Self {
        self.families.register(manufacturer_id, family, table);
        self
    }

    /// Start from a different registry, e.g. an empty one.
    pub fn device_families(mut self, families: DeviceFamilyRegistry) -> Self {
        self.families = families;
        self
    }

    pub fn build(self) -> Result<Monitor> {
        let session = MonitorSession::with_decoder(self.config, Decoder::new(self.families))?;
        tracing::debug!(
            identity_device_id = session.config().identity_device_id,
            vendors = session.decoder().families().vendor_count(),
            "monitor built"
        );
        Ok(Monitor::from_session(session))
    }
}
