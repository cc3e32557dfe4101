use serde::Deserialize;

/// One template file and the output path pattern it is generated into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplatePair {
    pub template: String,
    pub output: String,
}

impl TemplatePair {
    pub fn new(template: &str, output: &str) -> Self {
        Self {
            template: template.to_owned(),
            output: output.to_owned(),
        }
    }
}

/// A scaffolding task: the template pairs generated together when `flag`
/// is selected (header and source, or a single schema file).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationEntry {
    pub name: String,
    pub flag: String,
    pub files: Vec<TemplatePair>,
}

impl GenerationEntry {
    pub fn is_selected(&self, selection: &FlagSelection) -> bool {
        selection.contains(&self.flag)
    }
}

/// Which entries a run generates, parsed from the arguments after the class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagSelection {
    /// No flags were given: generate everything.
    All,
    /// Only entries whose flag appears in the list.
    Only(Vec<String>),
}

impl FlagSelection {
    pub fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            Self::All
        } else {
            Self::Only(args.to_vec())
        }
    }

    pub fn contains(&self, flag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(flags) => flags.iter().any(|f| f == flag),
        }
    }

    /// Flags that match none of `entries`.
    pub fn unrecognized<'a>(&'a self, entries: &[GenerationEntry]) -> Vec<&'a str> {
        match self {
            Self::All => Vec::new(),
            Self::Only(flags) => flags
                .iter()
                .filter(|f| !entries.iter().any(|e| &e.flag == *f))
                .map(String::as_str)
                .collect(),
        }
    }
}
