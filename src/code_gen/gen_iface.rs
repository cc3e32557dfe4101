use crate::{code_gen::plan::GenerationTask, utils::errors::EmptyResult};

/// Trait that all output sinks must adhere to.
pub trait OutputWriter {
    fn is_dry_run(&self) -> bool;
    fn write(&self, task: &GenerationTask, content: &str) -> EmptyResult;
}
