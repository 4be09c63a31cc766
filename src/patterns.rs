use regex::{Regex, RegexBuilder};
use std::path::Path;
use tracing::{debug, warn};

/// Compiled set of `*`-wildcard filename patterns, e.g. `*.ts`.
///
/// `*` expands to any substring (including empty); everything else is taken
/// as written, metacharacters included. Matches are anchored at both ends and
/// case-insensitive.
pub struct FilePatterns {
    regexes: Vec<Regex>,
}

impl FilePatterns {
    pub fn new(patterns: &[String]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|pattern| {
                let translated = format!("^{}$", pattern.replace('*', ".*"));
                match RegexBuilder::new(&translated).case_insensitive(true).build() {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        warn!("Invalid file pattern '{}': {}", pattern, e);
                        None
                    }
                }
            })
            .collect();

        debug!("Using file patterns: {:?}", patterns);

        FilePatterns { regexes }
    }

    /// True if the name matches any pattern. An empty pattern set matches
    /// nothing.
    pub fn matches(&self, file_name: &str) -> bool {
        self.regexes.iter().any(|regex| regex.is_match(file_name))
    }
}

/// One-shot form of [`FilePatterns`].
pub fn matches_pattern(file_name: &str, patterns: &[String]) -> bool {
    FilePatterns::new(patterns).matches(file_name)
}

enum ExcludeRule {
    Substring(String),
    Wildcard(Regex),
}

/// Compiled exclude rules, matched against full paths.
///
/// A rule containing `*` is compiled with the same wildcard translation as
/// [`FilePatterns`] but left unanchored, so it matches anywhere in the path.
/// A rule without `*` is plain substring containment.
pub struct ExcludeRules {
    rules: Vec<ExcludeRule>,
}

impl ExcludeRules {
    pub fn new(rules: &[String]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                if rule.contains('*') {
                    let translated = rule.replace('*', ".*");
                    match RegexBuilder::new(&translated).case_insensitive(true).build() {
                        Ok(regex) => Some(ExcludeRule::Wildcard(regex)),
                        Err(e) => {
                            warn!("Invalid exclude rule '{}': {}", rule, e);
                            None
                        }
                    }
                } else if rule.is_empty() {
                    None
                } else {
                    Some(ExcludeRule::Substring(rule.clone()))
                }
            })
            .collect();

        debug!("Using exclude rules: {:?}", rules);

        ExcludeRules { rules: compiled }
    }

    pub fn is_excluded<P: AsRef<Path>>(&self, path: P) -> bool {
        let path_str = path.as_ref().to_string_lossy().replace('\\', "/");
        self.rules.iter().any(|rule| match rule {
            ExcludeRule::Substring(s) => path_str.contains(s),
            ExcludeRule::Wildcard(regex) => regex.is_match(&path_str),
        })
    }
}
