use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a mode name does not match any known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} mode '{value}' (expected one of: {expected})")]
pub struct RuleParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// What happens to the stem as a whole before the finer-grained stages run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMode {
    #[default]
    Keep,
    Remove,
    Fixed,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Same,
    Lower,
    Upper,
    /// Capitalize the first letter of each whitespace-delimited word
    Title,
    /// Capitalize only the first character of the stem
    Sentence,
}

/// Where the sequence number goes, if anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingMode {
    #[default]
    None,
    Prefix,
    Suffix,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMode {
    #[default]
    Same,
    Lower,
    Upper,
    Remove,
    Fixed,
}

macro_rules! impl_mode_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = RuleParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(RuleParseError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::NAMES.join(", "),
                    }),
                }
            }
        }
    };
}

impl_mode_names!(NameMode, "name", {
    Keep => "keep",
    Remove => "remove",
    Fixed => "fixed",
    Reverse => "reverse",
});

impl_mode_names!(CaseMode, "case", {
    Same => "same",
    Lower => "lower",
    Upper => "upper",
    Title => "title",
    Sentence => "sentence",
});

impl_mode_names!(NumberingMode, "numbering", {
    None => "none",
    Prefix => "prefix",
    Suffix => "suffix",
    Insert => "insert",
});

impl_mode_names!(ExtensionMode, "extension", {
    Same => "same",
    Lower => "lower",
    Upper => "upper",
    Remove => "remove",
    Fixed => "fixed",
});

/// Snapshot of every rule parameter for one pipeline run.
///
/// Values are not validated here. Out-of-range counts and positions are
/// clamped by the pipeline, so any combination of fields is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Pattern to substitute in the stem (regular expression unless `regex_simple`)
    pub regex_match: String,
    pub regex_replace: String,
    /// Treat `regex_match` as a literal where `*` matches any run of characters
    pub regex_simple: bool,

    pub name_mode: NameMode,
    pub name_fixed: String,

    /// Substring to replace; empty disables the stage
    pub replace_search: String,
    pub replace_with: String,
    pub replace_match_case: bool,

    pub case_mode: CaseMode,

    pub remove_first: usize,
    pub remove_last: usize,
    /// 1-based inclusive range start, 0 means unset
    pub remove_from: usize,
    /// 1-based inclusive range end, 0 means "to the end of the stem"
    pub remove_to: usize,
    /// Every character in this string is stripped from the stem
    pub remove_chars: String,

    pub prefix: String,
    pub suffix: String,
    pub insert: String,
    pub insert_at: usize,

    pub numbering_mode: NumberingMode,
    pub numbering_start: i64,
    pub numbering_increment: i64,
    /// Minimum digit count, zero-padded
    pub numbering_pad: usize,
    pub numbering_separator: String,
    /// Character position used by `NumberingMode::Insert`
    pub numbering_at: usize,

    pub extension_mode: ExtensionMode,
    pub extension_fixed: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            regex_match: String::new(),
            regex_replace: String::new(),
            regex_simple: false,
            name_mode: NameMode::Keep,
            name_fixed: String::new(),
            replace_search: String::new(),
            replace_with: String::new(),
            replace_match_case: false,
            case_mode: CaseMode::Same,
            remove_first: 0,
            remove_last: 0,
            remove_from: 0,
            remove_to: 0,
            remove_chars: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            insert: String::new(),
            insert_at: 0,
            numbering_mode: NumberingMode::None,
            numbering_start: 1,
            numbering_increment: 1,
            numbering_pad: 0,
            numbering_separator: String::new(),
            numbering_at: 0,
            extension_mode: ExtensionMode::Same,
            extension_fixed: String::new(),
        }
    }
}

impl RuleConfig {
    /// Returns true if no stage would change any filename
    pub fn is_identity(&self) -> bool {
        self.regex_match.is_empty()
            && self.name_mode == NameMode::Keep
            && self.replace_search.is_empty()
            && self.case_mode == CaseMode::Same
            && self.remove_first == 0
            && self.remove_last == 0
            && self.remove_from == 0
            && self.remove_to == 0
            && self.remove_chars.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.insert.is_empty()
            && self.numbering_mode == NumberingMode::None
            && self.extension_mode == ExtensionMode::Same
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let config = RuleConfig::default();
        assert!(config.is_identity());
        assert_eq!(config.numbering_start, 1);
        assert_eq!(config.numbering_increment, 1);
    }

    #[test]
    fn test_any_active_stage_breaks_identity() {
        let config = RuleConfig {
            remove_chars: "-".to_string(),
            ..Default::default()
        };
        assert!(!config.is_identity());

        let config = RuleConfig {
            numbering_mode: NumberingMode::Prefix,
            ..Default::default()
        };
        assert!(!config.is_identity());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Reverse".parse::<NameMode>().unwrap(), NameMode::Reverse);
        assert_eq!(" title ".parse::<CaseMode>().unwrap(), CaseMode::Title);
        assert_eq!("suffix".parse::<NumberingMode>().unwrap(), NumberingMode::Suffix);
        assert_eq!("FIXED".parse::<ExtensionMode>().unwrap(), ExtensionMode::Fixed);
    }

    #[test]
    fn test_mode_from_str_rejects_unknown() {
        let err = "sideways".parse::<CaseMode>().unwrap_err();
        assert_eq!(err.kind, "case");
        assert!(err.to_string().contains("sideways"));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_content = r#"
numbering_mode = "suffix"
numbering_pad = 3
numbering_separator = "_"
"#;

        let config: RuleConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.numbering_mode, NumberingMode::Suffix);
        assert_eq!(config.numbering_pad, 3);
        assert_eq!(config.numbering_start, 1);
        assert_eq!(config.name_mode, NameMode::Keep);
        assert_eq!(config.extension_mode, ExtensionMode::Same);
    }
}
