use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"%[A-Z][A-Z0-9_]*%").unwrap();
}

pub struct StringUtils;

impl StringUtils {
    /// Returns every distinct `%TOKEN%`-shaped marker left in `text`, in order of appearance.
    pub fn find_tokens(text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            if !found.iter().any(|t| t == m.as_str()) {
                found.push(m.as_str().to_owned());
            }
        }
        found
    }

    pub fn starts_like_flag(value: &str) -> bool {
        value.starts_with('-')
    }

    pub fn has_path_separator(value: &str) -> bool {
        value.contains(['/', '\\'])
    }
}
