//! Data models for the equipment service

pub mod equipment;
pub mod legacy;

// Re-export commonly used types
pub use equipment::{Deleted, Equipment, EquipmentPayload};
pub use legacy::{LegacyEquipment, LegacyEquipmentPayload, LegacyIdQuery};
