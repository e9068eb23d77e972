//! Problem catalog: pool provider, filtering, topic inference, and sampling

pub mod provider;
pub mod sampler;
pub mod topic;

pub use provider::{CatalogClient, PoolProvider, filter_pool};
pub use sampler::sample_without_replacement;
pub use topic::infer_topic;
