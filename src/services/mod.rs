pub mod enrichment;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod recommendations;
pub mod themes;

pub use enrichment::MissPolicy;
pub use recommendations::{submit, PipelineOptions, RecommendationPipeline};
