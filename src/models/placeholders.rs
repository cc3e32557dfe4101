use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

pub const YEAR: &str = "%YEAR%";
pub const CLASS_NAME: &str = "%CLASSNAME%";
pub const CLASS_NAME_LOWER: &str = "%CLASSNAMELOWERCASE%";
pub const CLASS_NAME_UPPER: &str = "%CLASSNAMEUPPERCASE%";

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(
        &Placeholder::ALL
            .iter()
            .map(|p| regex::escape(p.token()))
            .collect::<Vec<_>>()
            .join("|")
    )
    .unwrap();
}

/// The tokens recognized in templates and output path patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Year,
    ClassName,
    ClassNameLower,
    ClassNameUpper,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Self::Year,
        Self::ClassName,
        Self::ClassNameLower,
        Self::ClassNameUpper,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Year => YEAR,
            Self::ClassName => CLASS_NAME,
            Self::ClassNameLower => CLASS_NAME_LOWER,
            Self::ClassNameUpper => CLASS_NAME_UPPER,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Values substituted into template bodies and output path patterns.
///
/// Built once per run; the lower and upper case forms are derived from the
/// class name exactly as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionContext {
    pub class_name: String,
    pub class_name_lower: String,
    pub class_name_upper: String,
    pub year: String,
}

impl SubstitutionContext {
    pub fn new(class_name: &str, year: i32) -> Self {
        Self {
            class_name: class_name.to_owned(),
            class_name_lower: class_name.to_lowercase(),
            class_name_upper: class_name.to_uppercase(),
            year: format!("{year:04}"),
        }
    }

    pub fn for_today(class_name: &str) -> Self {
        Self::new(class_name, Local::now().year())
    }

    pub fn value_of(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Year => &self.year,
            Placeholder::ClassName => &self.class_name,
            Placeholder::ClassNameLower => &self.class_name_lower,
            Placeholder::ClassNameUpper => &self.class_name_upper,
        }
    }

    /// Replaces every placeholder token in a single pass.
    ///
    /// Replacement text is never rescanned, so a class name that happens to
    /// contain a token is written out verbatim.
    pub fn apply(&self, input: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(input, |caps: &Captures| {
                let matched = &caps[0];
                Placeholder::from_token(matched)
                    .map_or(matched, |p| self.value_of(p))
                    .to_owned()
            })
            .into_owned()
    }
}
