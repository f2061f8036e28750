//! Static lookup tables: note names, controller names, manufacturer IDs,
//! device-ID annotation and vendor device families.
//!
//! Everything here is for human-facing labels. Decoding correctness never
//! depends on a table hit.

pub mod controller;
pub mod device_family;
pub mod device_id;
pub mod manufacturer;
pub mod note;

pub use controller::{controller_label, controller_name};
pub use device_family::{DeviceFamilyRegistry, FamilyTable};
pub use device_id::{device_id_formats, device_id_info, DeviceIdInfo};
pub use manufacturer::{manufacturer_name, ManufacturerId};
pub use note::{note_name, octave, pitch_class_name};

/// Binary search over a `(code, label)` table sorted by code.
pub(crate) fn lookup<K: Ord + Copy>(table: &[(K, &'static str)], code: K) -> Option<&'static str> {
    table
        .binary_search_by_key(&code, |&(k, _)| k)
        .ok()
        .map(|idx| table[idx].1)
}
