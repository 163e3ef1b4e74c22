mod errors;
mod pipeline;
mod reconciler;

pub use pipeline::{Pipeline, PipelineOptions};
