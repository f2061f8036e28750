//! Session configuration.

use serde::{Deserialize, Serialize};

use midiscope_decode::{Category, BROADCAST_DEVICE_ID};

use crate::error::{Error, Result};
use crate::mapping::ImportMode;

/// Which categories the message log shows. Pitch bend and system
/// messages are governed by `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageFilters {
    pub sysex: bool,
    pub notes: bool,
    pub cc: bool,
    pub program: bool,
    pub other: bool,
}

impl Default for MessageFilters {
    fn default() -> Self {
        Self::all()
    }
}

impl MessageFilters {
    pub const fn all() -> Self {
        Self {
            sysex: true,
            notes: true,
            cc: true,
            program: true,
            other: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            sysex: false,
            notes: false,
            cc: false,
            program: false,
            other: false,
        }
    }

    pub fn allows(&self, category: Category) -> bool {
        match category {
            Category::Sysex => self.sysex,
            Category::Note => self.notes,
            Category::Cc => self.cc,
            Category::Program => self.program,
            Category::Pitchbend | Category::System | Category::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub filters: MessageFilters,
    /// Target of Identity Requests. 0x7F addresses every device.
    pub identity_device_id: u8,
    pub default_import_mode: ImportMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            filters: MessageFilters::default(),
            identity_device_id: BROADCAST_DEVICE_ID,
            default_import_mode: ImportMode::Merge,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.identity_device_id > 0x7F {
            return Err(Error::InvalidConfig(format!(
                "identity_device_id {} out of range (0-127)",
                self.identity_device_id
            )));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
