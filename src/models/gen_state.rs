use std::path::PathBuf;

use crate::code_gen::plan::GenerationTask;

/// Outcome of a generation run.
#[derive(Debug, Default, Clone)]
pub struct GenState {
    pub tasks: Vec<GenerationTask>,
    pub created_dirs: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenState {
    /// Directories actually created on disk; a dry run creates none.
    pub fn dirs_created(&self) -> &[PathBuf] {
        if self.dry_run {
            &[]
        } else {
            &self.created_dirs
        }
    }

    /// One line per output file, as printed on stdout.
    pub fn summary_lines(&self) -> Vec<String> {
        let prefix = if self.dry_run { "would write " } else { "" };
        self.tasks
            .iter()
            .map(|task| format!("{prefix}{}", task.output.display()))
            .collect()
    }
}
