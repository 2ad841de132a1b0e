pub mod family;
pub mod load;
pub mod target;

pub use family::{FamilyCatalog, FamilyRecord};
pub use load::{load_families, load_targets, EXPECTED_FAMILY_COLUMNS, EXPECTED_TARGET_COLUMNS};
pub use target::{TargetCatalog, TargetRecord};
