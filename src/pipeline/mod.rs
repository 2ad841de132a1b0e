pub mod batch;
pub mod curated;
pub mod dedup;

pub use batch::BatchMapper;
pub use curated::CuratedKeys;
pub use dedup::DedupPipeline;
