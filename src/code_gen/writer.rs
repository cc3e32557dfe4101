use std::fs;

use tracing::info;

use crate::{
    code_gen::{gen_iface::OutputWriter, plan::GenerationTask},
    utils::errors::{EmptyResult, ResultTrait as _},
};

/// Creates or overwrites the output file.
pub struct FileWriter;

impl OutputWriter for FileWriter {
    fn is_dry_run(&self) -> bool {
        false
    }

    fn write(&self, task: &GenerationTask, content: &str) -> EmptyResult {
        fs::write(&task.output, content).write_err(&task.output)?;
        info!(
            "✅ [{}] {} -> {}",
            task.entry,
            task.template.display(),
            task.output.display()
        );
        Ok(())
    }
}

/// Leaves the filesystem untouched.
pub struct DryRunWriter;

impl OutputWriter for DryRunWriter {
    fn is_dry_run(&self) -> bool {
        true
    }

    fn write(&self, task: &GenerationTask, content: &str) -> EmptyResult {
        info!(
            "Would write {} ({} bytes) from {}",
            task.output.display(),
            content.len(),
            task.template.display()
        );
        Ok(())
    }
}
