use std::path::PathBuf;

use clap::Parser;

use crate::utils::{
    errors::{EmptyResult, GenError},
    string::StringUtils,
};

pub const USAGE_EXAMPLES: &str = "\
Examples:
  generate FeatureName
  generate FeatureName --feature
  generate FeatureName --command
  generate FeatureName --feature --command --serial --commandView";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "generate",
    version,
    about = "Scaffold feature, command, command view and serial schema sources from templates.",
    long_about = r#"
Copies the source templates found in the template directory into their sibling
source directories, replacing the placeholders:

  %YEAR%                 current year
  %CLASSNAME%            the class name as given
  %CLASSNAMELOWERCASE%   the class name in lower case
  %CLASSNAMEUPPERCASE%   the class name in upper case

Without flags after the class name every file is generated. Otherwise only the
entries whose flag is listed are generated; unknown flags are ignored.

Outputs, relative to the template directory:
  --feature       ../feature/ftr<name>.h, ../feature/ftr<name>.cpp
  --command       ../command/cmd<name>.h, ../command/cmd<name>.cpp
  --serial        ../project/serial/schema/prjsrl_FIX_<name>.xsd
  --commandView   ../commandview/cmv<name>.h, ../commandview/cmv<name>.cpp

A generate.yaml in the template directory replaces this table.
"#,
    after_help = USAGE_EXAMPLES
)]
pub struct AppArgs {
    /// Directory holding the templates; outputs are resolved relative to it
    #[arg(short = 'C', long = "dir", value_name = "DIR", default_value = ".")]
    pub template_dir: PathBuf,

    /// Create missing output directories instead of failing
    #[arg(long)]
    pub create_dirs: bool,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Class name to scaffold followed by the entries to generate:
    /// --feature, --command, --serial, --commandView
    ///
    /// Everything from the class name on is taken verbatim, so options
    /// placed after it count as (unknown) entry flags.
    #[arg(
        value_name = "CLASSNAME [FLAGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub rest: Vec<String>,
}

impl AppArgs {
    /// The first positional argument, or "" when none was given.
    pub fn class_name(&self) -> &str {
        self.rest.first().map_or("", String::as_str)
    }

    /// Everything after the class name.
    pub fn flags(&self) -> &[String] {
        self.rest.get(1..).unwrap_or_default()
    }

    pub fn validate(&self) -> EmptyResult {
        let class_name = self.class_name();
        if class_name.is_empty() {
            return Err(GenError::Usage(
                "Wrong number of arguments. Need at least classname".into(),
            ));
        }
        if StringUtils::starts_like_flag(class_name) {
            return Err(GenError::Usage(format!("invalid classname '{class_name}'")));
        }
        if StringUtils::has_path_separator(class_name) {
            return Err(GenError::Usage(format!(
                "invalid classname '{class_name}': path separators are not allowed"
            )));
        }
        Ok(())
    }
}
