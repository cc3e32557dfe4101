use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::utils::errors::{EmptyResult, ResultTrait};

pub struct DirUtils;

impl DirUtils {
    /// Joins `relative` onto `base`, leaving it untouched when `base` is `.`.
    pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
        if base == Path::new(".") {
            PathBuf::from(relative)
        } else {
            base.join(relative)
        }
    }

    /// Parent directories of `outputs` that do not exist yet, deduplicated, in first-seen order.
    pub fn missing_parents<'a, I>(outputs: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut missing: Vec<PathBuf> = Vec::new();
        for output in outputs {
            let Some(parent) = output.parent() else {
                continue;
            };
            if parent.as_os_str().is_empty() || parent.is_dir() {
                continue;
            }
            if !missing.iter().any(|p| p == parent) {
                missing.push(parent.to_path_buf());
            }
        }
        missing
    }

    pub fn create_all(dirs: &[PathBuf]) -> EmptyResult {
        for dir in dirs {
            debug!("Creating directory {:?}", dir);
            fs::create_dir_all(dir).create_dir_err(dir)?;
            info!("📁 Created {}", dir.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reports_each_missing_parent_once() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("feature")).unwrap();

        let outputs = [
            root.join("feature/ftrblend.h"),
            root.join("command/cmdblend.h"),
            root.join("command/cmdblend.cpp"),
        ];
        let missing = DirUtils::missing_parents(outputs.iter().map(PathBuf::as_path));

        assert_eq!(missing, vec![root.join("command")]);
    }

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("project/serial/schema");

        DirUtils::create_all(std::slice::from_ref(&nested)).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn joins_relative_paths() {
        assert_eq!(
            DirUtils::join_relative(Path::new("."), "../feature/ftrblend.h"),
            PathBuf::from("../feature/ftrblend.h")
        );
        assert_eq!(
            DirUtils::join_relative(Path::new("templates"), "featureTemplate.h"),
            PathBuf::from("templates/featureTemplate.h")
        );
    }
}
