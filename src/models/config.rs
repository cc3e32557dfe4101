use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::{
    models::{
        entry::{GenerationEntry, TemplatePair},
        placeholders::CLASS_NAME_LOWER,
    },
    utils::{
        errors::{GenError, ResultWithError},
        variables::VariablesUtils,
    },
};

pub const CONFIG_FILE_NAME: &str = "generate.yaml";

/// The generation table: which templates exist and where they are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub entries: Vec<GenerationEntry>,
}

impl Default for Config {
    fn default() -> Self {
        let lower = CLASS_NAME_LOWER;
        let entry = |name: &str, flag: &str, files: Vec<TemplatePair>| GenerationEntry {
            name: name.to_owned(),
            flag: flag.to_owned(),
            files,
        };

        Self {
            entries: vec![
                entry(
                    "feature",
                    "--feature",
                    vec![
                        TemplatePair::new("featureTemplate.h", &format!("../feature/ftr{lower}.h")),
                        TemplatePair::new(
                            "featureTemplate.cpp",
                            &format!("../feature/ftr{lower}.cpp"),
                        ),
                    ],
                ),
                entry(
                    "command",
                    "--command",
                    vec![
                        TemplatePair::new("commandTemplate.h", &format!("../command/cmd{lower}.h")),
                        TemplatePair::new(
                            "commandTemplate.cpp",
                            &format!("../command/cmd{lower}.cpp"),
                        ),
                    ],
                ),
                entry(
                    "serial",
                    "--serial",
                    vec![TemplatePair::new(
                        "serialTemplate.xsd",
                        &format!("../project/serial/schema/prjsrl_FIX_{lower}.xsd"),
                    )],
                ),
                entry(
                    "commandView",
                    "--commandView",
                    vec![
                        TemplatePair::new(
                            "commandViewTemplate.h",
                            &format!("../commandview/cmv{lower}.h"),
                        ),
                        TemplatePair::new(
                            "commandViewTemplate.cpp",
                            &format!("../commandview/cmv{lower}.cpp"),
                        ),
                    ],
                ),
            ],
        }
    }
}

impl Config {
    /// Loads `generate.yaml` from `dir`, falling back to the built-in table.
    pub fn from_dir(dir: &Path) -> ResultWithError<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            debug!("No {} in {:?}, using built-in table", CONFIG_FILE_NAME, dir);
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_path);
        let content = fs::read_to_string(&config_path).map_err(|e| GenError::Config {
            path: config_path.clone(),
            message: e.to_string(),
        })?;

        let expanded = VariablesUtils::expand_env_vars(&content);
        debug!("Config expanded");

        Self::parse(&expanded).map_err(|message| GenError::Config {
            path: config_path,
            message,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.entries.is_empty() {
            return Err("at least one entry is required".into());
        }

        let mut names = HashSet::new();
        for entry in &self.entries {
            if !names.insert(entry.name.as_str()) {
                return Err(format!("duplicate entry name '{}'", entry.name));
            }
            if !entry.flag.starts_with("--") {
                return Err(format!(
                    "flag '{}' of entry '{}' must start with '--'",
                    entry.flag, entry.name
                ));
            }
            if !(1..=2).contains(&entry.files.len()) {
                return Err(format!(
                    "entry '{}' must list one or two files, found {}",
                    entry.name,
                    entry.files.len()
                ));
            }
            if entry
                .files
                .iter()
                .any(|f| f.template.trim().is_empty() || f.output.trim().is_empty())
            {
                return Err(format!(
                    "entry '{}' has an empty template or output",
                    entry.name
                ));
            }
        }

        Ok(())
    }

    /// Every template the table refers to, in table order, without duplicates.
    pub fn required_templates(&self) -> Vec<&str> {
        let mut templates: Vec<&str> = Vec::new();
        for pair in self.entries.iter().flat_map(|e| &e.files) {
            if !templates.contains(&pair.template.as_str()) {
                templates.push(&pair.template);
            }
        }
        templates
    }
}
