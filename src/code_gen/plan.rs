use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    models::{config::Config, entry::FlagSelection, placeholders::SubstitutionContext},
    utils::{
        dir::DirUtils,
        errors::{EmptyResult, GenError},
    },
};

/// A single file to generate: which entry it belongs to, the template read and
/// the output written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub entry: String,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl GenerationTask {
    /// Builds the tasks for every selected entry, in table order.
    pub fn plan(
        config: &Config,
        selection: &FlagSelection,
        ctx: &SubstitutionContext,
        base_dir: &Path,
    ) -> Vec<Self> {
        config
            .entries
            .iter()
            .filter(|entry| {
                let selected = entry.is_selected(selection);
                debug!("Entry {} ({}): selected={}", entry.name, entry.flag, selected);
                selected
            })
            .flat_map(|entry| {
                entry.files.iter().map(move |pair| GenerationTask {
                    entry: entry.name.clone(),
                    template: DirUtils::join_relative(base_dir, &pair.template),
                    output: DirUtils::join_relative(base_dir, &ctx.apply(&pair.output)),
                })
            })
            .collect()
    }
}

/// Fails on the first template of the table that is not a regular file.
pub fn check_templates(config: &Config, base_dir: &Path) -> EmptyResult {
    for template in config.required_templates() {
        let path = DirUtils::join_relative(base_dir, template);
        if !path.is_file() {
            return Err(GenError::MissingTemplate(path));
        }
    }
    Ok(())
}
