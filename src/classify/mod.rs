pub mod ec;
pub mod name;
pub mod record;
pub mod resolver;

pub use record::{ClassificationRecord, Status};
pub use resolver::Resolver;
