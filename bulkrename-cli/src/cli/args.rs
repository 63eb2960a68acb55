use bulkrename_core::RuleConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{CaseArg, ExtArg, NameModeArg, NumberArg, OutputFormat, PreviewArg};

/// Batch rename files with a previewable pipeline of text rules
#[derive(Parser, Debug)]
#[command(name = "bulkrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Assume yes for all prompts
    #[arg(short = 'y', long = "yes", global = true, env = "BULKRENAME_YES")]
    pub yes: bool,
}

/// Rule flags. Each one overrides the matching field of the preset or rules
/// file it is combined with.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Load rules from a TOML file
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    pub rules: Option<PathBuf>,

    /// Start from a preset defined in the config file
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Regular expression matched against the name (without extension)
    #[arg(long, value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Replacement for --regex matches; supports $1 and ${name}
    #[arg(long, value_name = "TEXT")]
    pub regex_replace: Option<String>,

    /// Treat --regex as a plain pattern where only * is special
    #[arg(long)]
    pub simple: bool,

    /// What to do with the original name
    #[arg(long, value_enum)]
    pub name_mode: Option<NameModeArg>,

    /// Replacement name for --name-mode fixed (implies it)
    #[arg(long, value_name = "TEXT")]
    pub name_fixed: Option<String>,

    /// Substring to replace
    #[arg(long = "replace", value_name = "TEXT")]
    pub replace_search: Option<String>,

    /// Replacement for --replace
    #[arg(long = "with", value_name = "TEXT")]
    pub replace_with: Option<String>,

    /// Make --replace case-sensitive
    #[arg(long)]
    pub match_case: bool,

    /// Case conversion applied after numbering
    #[arg(long = "case", value_enum)]
    pub case_mode: Option<CaseArg>,

    /// Remove the first N characters
    #[arg(long, value_name = "N")]
    pub remove_first: Option<usize>,

    /// Remove the last N characters
    #[arg(long, value_name = "N")]
    pub remove_last: Option<usize>,

    /// Start of a 1-based inclusive range to remove
    #[arg(long, value_name = "N")]
    pub remove_from: Option<usize>,

    /// End of a 1-based inclusive range to remove (0 = to the end)
    #[arg(long, value_name = "N")]
    pub remove_to: Option<usize>,

    /// Remove every occurrence of these characters
    #[arg(long, value_name = "CHARS")]
    pub remove_chars: Option<String>,

    /// Text to prepend
    #[arg(long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Text to append before the extension
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,

    /// Text to insert at --insert-at
    #[arg(long, value_name = "TEXT")]
    pub insert: Option<String>,

    /// 0-based character position for --insert
    #[arg(long, value_name = "POS")]
    pub insert_at: Option<usize>,

    /// Where to place the sequence number
    #[arg(long = "number", value_enum)]
    pub numbering_mode: Option<NumberArg>,

    /// Number given to the first file
    #[arg(long = "number-start", value_name = "N", allow_negative_numbers = true)]
    pub numbering_start: Option<i64>,

    /// Step between consecutive numbers
    #[arg(long = "number-increment", value_name = "N", allow_negative_numbers = true)]
    pub numbering_increment: Option<i64>,

    /// Zero-pad numbers to this width
    #[arg(long = "number-pad", value_name = "WIDTH")]
    pub numbering_pad: Option<usize>,

    /// Separator between the number and the name
    #[arg(long = "number-sep", value_name = "TEXT")]
    pub numbering_separator: Option<String>,

    /// 0-based character position for --number insert
    #[arg(long = "number-at", value_name = "POS")]
    pub numbering_at: Option<usize>,

    /// What to do with the extension
    #[arg(long = "ext", value_enum)]
    pub extension_mode: Option<ExtArg>,

    /// Replacement extension for --ext fixed (implies it); a leading dot is added
    #[arg(long = "ext-fixed", value_name = "EXT")]
    pub extension_fixed: Option<String>,
}

impl RuleArgs {
    /// Overlay the flags that were given onto `rules`
    pub fn apply_to(&self, rules: &mut RuleConfig) {
        if let Some(pattern) = &self.regex {
            rules.regex_match.clone_from(pattern);
        }
        if let Some(replace) = &self.regex_replace {
            rules.regex_replace.clone_from(replace);
        }
        if self.simple {
            rules.regex_simple = true;
        }

        if let Some(fixed) = &self.name_fixed {
            rules.name_fixed.clone_from(fixed);
            rules.name_mode = bulkrename_core::NameMode::Fixed;
        }
        if let Some(mode) = self.name_mode {
            rules.name_mode = mode.into();
        }

        if let Some(search) = &self.replace_search {
            rules.replace_search.clone_from(search);
        }
        if let Some(with) = &self.replace_with {
            rules.replace_with.clone_from(with);
        }
        if self.match_case {
            rules.replace_match_case = true;
        }

        if let Some(mode) = self.case_mode {
            rules.case_mode = mode.into();
        }

        set(&mut rules.remove_first, self.remove_first);
        set(&mut rules.remove_last, self.remove_last);
        set(&mut rules.remove_from, self.remove_from);
        set(&mut rules.remove_to, self.remove_to);
        if let Some(chars) = &self.remove_chars {
            rules.remove_chars.clone_from(chars);
        }

        if let Some(prefix) = &self.prefix {
            rules.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            rules.suffix.clone_from(suffix);
        }
        if let Some(insert) = &self.insert {
            rules.insert.clone_from(insert);
        }
        set(&mut rules.insert_at, self.insert_at);

        if let Some(mode) = self.numbering_mode {
            rules.numbering_mode = mode.into();
        }
        set(&mut rules.numbering_start, self.numbering_start);
        set(&mut rules.numbering_increment, self.numbering_increment);
        set(&mut rules.numbering_pad, self.numbering_pad);
        if let Some(sep) = &self.numbering_separator {
            rules.numbering_separator.clone_from(sep);
        }
        set(&mut rules.numbering_at, self.numbering_at);

        if let Some(ext) = &self.extension_fixed {
            rules.extension_fixed.clone_from(ext);
            rules.extension_mode = bulkrename_core::ExtensionMode::Fixed;
        }
        if let Some(mode) = self.extension_mode {
            rules.extension_mode = mode.into();
        }
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what the rules would do to every file in a directory
    Preview {
        /// Directory whose files are renamed
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Preview format (defaults to the config file setting)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Rename every file in a directory according to the rules
    Rename {
        /// Directory whose files are renamed
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Show preview before confirmation prompt
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Show the plan without renaming anything
        #[arg(long)]
        dry_run: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkrename_core::{CaseMode, ExtensionMode, NameMode, NumberingMode};
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bulkrename").chain(args.iter().copied())).unwrap()
    }

    fn rule_args(cli: Cli) -> RuleArgs {
        match cli.command {
            Commands::Preview { rules, .. } | Commands::Rename { rules, .. } => rules,
            Commands::Version { .. } => panic!("no rule arguments"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_preset_fields() {
        let args = rule_args(parse(&[
            "preview",
            "photos",
            "--case",
            "lower",
            "--number",
            "suffix",
            "--number-start",
            "-3",
            "--number-pad",
            "2",
        ]));

        let mut rules = RuleConfig {
            prefix: "keep_".to_string(),
            case_mode: CaseMode::Upper,
            ..Default::default()
        };
        args.apply_to(&mut rules);

        assert_eq!(rules.prefix, "keep_");
        assert_eq!(rules.case_mode, CaseMode::Lower);
        assert_eq!(rules.numbering_mode, NumberingMode::Suffix);
        assert_eq!(rules.numbering_start, -3);
        assert_eq!(rules.numbering_pad, 2);
        assert_eq!(rules.numbering_increment, 1);
    }

    #[test]
    fn test_fixed_values_imply_their_mode() {
        let args = rule_args(parse(&["rename", "--name-fixed", "x", "--ext-fixed", "md"]));
        let mut rules = RuleConfig::default();
        args.apply_to(&mut rules);

        assert_eq!(rules.name_mode, NameMode::Fixed);
        assert_eq!(rules.name_fixed, "x");
        assert_eq!(rules.extension_mode, ExtensionMode::Fixed);
        assert_eq!(rules.extension_fixed, "md");
    }

    #[test]
    fn test_rules_and_preset_conflict() {
        let result = Cli::try_parse_from([
            "bulkrename",
            "preview",
            "--rules",
            "r.toml",
            "--preset",
            "photos",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "--yes", "rename", "--dry-run"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.yes);
        assert!(matches!(cli.command, Commands::Rename { dry_run: true, .. }));
    }
}
