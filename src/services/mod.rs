//! Business logic services

pub mod equipment;
pub mod legacy;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub legacy: legacy::LegacyEquipmentService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            legacy: legacy::LegacyEquipmentService::new(repository),
        }
    }
}
