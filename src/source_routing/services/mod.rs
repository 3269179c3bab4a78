pub mod resolver;

pub use resolver::{SourceAffinityResolver, CONDA_DOMINANCE_RATIO};
