use std::{fs, path::PathBuf};

use tracing::{debug, info, warn};

use crate::{
    code_gen::{
        gen_iface::OutputWriter,
        plan::{self, GenerationTask},
        writer::{DryRunWriter, FileWriter},
    },
    models::{
        args::AppArgs, config::Config, entry::FlagSelection, gen_state::GenState,
        placeholders::SubstitutionContext,
    },
    utils::{
        dir::DirUtils,
        errors::{GenError, ResultTrait as _, ResultWithError},
        string::StringUtils,
    },
};

/// Main controller to run the code generation logic.
pub struct CodeGen {
    args: AppArgs,
    config: Config,
    ctx: SubstitutionContext,
}

impl CodeGen {
    pub fn new(args: AppArgs, config: Config) -> Self {
        let ctx = SubstitutionContext::for_today(args.class_name());
        Self::with_context(args, config, ctx)
    }

    pub fn with_context(args: AppArgs, config: Config, ctx: SubstitutionContext) -> Self {
        Self { args, config, ctx }
    }

    pub fn execute(&self) -> ResultWithError<GenState> {
        info!("Code generation started for class {}", self.ctx.class_name);

        let state = if self.args.dry_run {
            self.generate_code(&DryRunWriter)?
        } else {
            self.generate_code(&FileWriter)?
        };

        info!("Code generation finished, {} file(s)", state.tasks.len());

        Ok(state)
    }

    fn generate_code(&self, writer: &dyn OutputWriter) -> ResultWithError<GenState> {
        self.args.validate()?;

        let base_dir = &self.args.template_dir;
        plan::check_templates(&self.config, base_dir)?;

        let selection = FlagSelection::from_args(self.args.flags());
        for flag in selection.unrecognized(&self.config.entries) {
            debug!("Ignoring unknown flag {}", flag);
        }

        let tasks = GenerationTask::plan(&self.config, &selection, &self.ctx, base_dir);
        if tasks.is_empty() {
            info!("No entry selected. Nothing to generate.");
        }

        let rendered = tasks
            .iter()
            .map(|task| self.render(task))
            .collect::<ResultWithError<Vec<_>>>()?;

        let created_dirs = self.prepare_output_dirs(&tasks, writer.is_dry_run())?;

        for (task, content) in tasks.iter().zip(&rendered) {
            writer.write(task, content)?;
        }

        Ok(GenState {
            tasks,
            created_dirs,
            dry_run: writer.is_dry_run(),
        })
    }

    fn render(&self, task: &GenerationTask) -> ResultWithError<String> {
        let template = fs::read_to_string(&task.template).read_err(&task.template)?;
        let content = self.ctx.apply(&template);

        let leftovers = StringUtils::find_tokens(&content);
        if !leftovers.is_empty() {
            warn!(
                "{} still contains unknown placeholders: {}",
                task.template.display(),
                leftovers.join(", ")
            );
        }

        Ok(content)
    }

    /// Fails on missing output directories unless `--create-dirs` was given.
    fn prepare_output_dirs(
        &self,
        tasks: &[GenerationTask],
        dry_run: bool,
    ) -> ResultWithError<Vec<PathBuf>> {
        let missing = DirUtils::missing_parents(tasks.iter().map(|t| t.output.as_path()));
        if missing.is_empty() {
            return Ok(missing);
        }

        if !self.args.create_dirs {
            return Err(GenError::MissingOutputDir(missing[0].clone()));
        }

        if dry_run {
            for dir in &missing {
                info!("Would create {}", dir.display());
            }
        } else {
            DirUtils::create_all(&missing)?;
        }

        Ok(missing)
    }
}
