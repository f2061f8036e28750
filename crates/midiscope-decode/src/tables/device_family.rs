//! Pluggable registry of vendor device families, consulted when an
//! Identity Reply names a manufacturer, family and family member.

use std::collections::{BTreeMap, HashMap};

/// Akai Professional one-byte manufacturer ID.
pub const AKAI: u8 = 0x47;

/// One device family of a vendor and its known members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTable {
    name: String,
    members: BTreeMap<u16, String>,
}

impl FamilyTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    pub fn member(mut self, code: u16, name: impl Into<String>) -> Self {
        self.members.insert(code, name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_name(&self, code: u16) -> Option<&str> {
        self.members.get(&code).map(String::as_str)
    }
}

/// Device families keyed by one-byte manufacturer ID, then by family code.
#[derive(Debug, Clone, Default)]
pub struct DeviceFamilyRegistry {
    vendors: HashMap<u8, HashMap<u16, FamilyTable>>,
}

impl DeviceFamilyRegistry {
    /// Empty registry; every lookup falls back to raw family/member numbers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the families this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            AKAI,
            0x0026,
            FamilyTable::new("MPC Series")
                .member(0x0019, "MPC Live/X/One")
                .member(0x001A, "MPC Touch")
                .member(0x001B, "MPC Renaissance")
                .member(0x001C, "MPC Studio")
                .member(0x001D, "MPC Element"),
        );
        registry.register(
            AKAI,
            0x0010,
            FamilyTable::new("S-Series")
                .member(0x0001, "S1000")
                .member(0x0002, "S2000")
                .member(0x0003, "S3000"),
        );
        registry
    }

    /// Add or replace a family table. Returns the table it replaced.
    pub fn register(
        &mut self,
        manufacturer_id: u8,
        family: u16,
        table: FamilyTable,
    ) -> Option<FamilyTable> {
        self.vendors
            .entry(manufacturer_id)
            .or_default()
            .insert(family, table)
    }

    pub fn family(&self, manufacturer_id: u8, family: u16) -> Option<&FamilyTable> {
        self.vendors.get(&manufacturer_id)?.get(&family)
    }

    /// Friendly name, or `None` if the family is not registered.
    pub fn resolve(&self, manufacturer_id: u8, family: u16, member: u16) -> Option<String> {
        let table = self.family(manufacturer_id, family)?;
        Some(match table.member_name(member) {
            Some(member_name) => format!("{} - {}", table.name(), member_name),
            None => format!("{} (Member {})", table.name(), member),
        })
    }

    /// Friendly name when registered, `Family: f, Member: m` otherwise.
    pub fn details(&self, manufacturer_id: u8, family: u16, member: u16) -> String {
        self.resolve(manufacturer_id, family, member)
            .unwrap_or_else(|| format!("Family: {family}, Member: {member}"))
    }

    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }
}
