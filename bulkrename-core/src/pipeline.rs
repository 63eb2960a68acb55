//! The rename transformation pipeline.
//!
//! A filename is split once into stem and extension, the stem runs through
//! the stages below in a fixed order, the extension through its own stage,
//! and the two are joined again:
//!
//! 1. pattern substitution
//! 2. name mode
//! 3. substring replace
//! 4. removal (first n, last n, range, character set)
//! 5. insertion (prefix, suffix, positional insert)
//! 6. numbering
//! 7. case conversion
//! 8. extension transform
//!
//! The order is part of the contract: case conversion runs after numbering,
//! and every stage except the last sees only the stem.

use crate::filename::{normalize_extension, split_name};
use crate::rules::{CaseMode, ExtensionMode, NameMode, NumberingMode, RuleConfig};
use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};

/// A `RuleConfig` with its patterns compiled, ready to transform many names.
///
/// Build one per planning pass; `transform` is then pure and cheap.
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    config: &'a RuleConfig,
    pattern: Option<Regex>,
    replace_insensitive: Option<Regex>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a RuleConfig) -> Self {
        Self {
            config,
            pattern: compile_match_pattern(config),
            replace_insensitive: compile_insensitive_replace(config),
        }
    }

    pub fn config(&self) -> &RuleConfig {
        self.config
    }

    /// Compute the new name for `original_name` at 1-based `sequence_index`
    pub fn transform(&self, original_name: &str, sequence_index: usize) -> String {
        let (stem, extension) = split_name(original_name);
        let mut stem = stem.to_string();

        stem = self.apply_pattern(stem);
        stem = self.apply_name_mode(stem);
        stem = self.apply_replace(stem);
        stem = self.apply_removal(stem);
        stem = self.apply_insertion(stem);
        stem = self.apply_numbering(stem, sequence_index);
        stem = apply_case(&stem, self.config.case_mode);

        let extension = self.apply_extension(extension);
        stem + &extension
    }

    fn apply_pattern(&self, stem: String) -> String {
        match &self.pattern {
            Some(re) => re
                .replace_all(&stem, self.config.regex_replace.as_str())
                .into_owned(),
            None => stem,
        }
    }

    fn apply_name_mode(&self, stem: String) -> String {
        match self.config.name_mode {
            NameMode::Keep => stem,
            NameMode::Remove => String::new(),
            NameMode::Fixed => self.config.name_fixed.clone(),
            NameMode::Reverse => stem.chars().rev().collect(),
        }
    }

    fn apply_replace(&self, stem: String) -> String {
        let search = &self.config.replace_search;
        if search.is_empty() {
            return stem;
        }

        if self.config.replace_match_case {
            return stem.replace(search.as_str(), &self.config.replace_with);
        }

        match &self.replace_insensitive {
            Some(re) => re
                .replace_all(&stem, NoExpand(&self.config.replace_with))
                .into_owned(),
            None => stem,
        }
    }

    fn apply_removal(&self, stem: String) -> String {
        let config = self.config;
        let mut stem = stem;

        if config.remove_first > 0 {
            stem = stem.chars().skip(config.remove_first).collect();
        }

        if config.remove_last > 0 {
            let len = stem.chars().count();
            if len > config.remove_last {
                stem = stem.chars().take(len - config.remove_last).collect();
            }
        }

        if config.remove_from > 0 || config.remove_to > 0 {
            stem = remove_range(&stem, config.remove_from, config.remove_to);
        }

        if !config.remove_chars.is_empty() {
            stem.retain(|c| !config.remove_chars.contains(c));
        }

        stem
    }

    fn apply_insertion(&self, stem: String) -> String {
        let config = self.config;
        let mut stem = stem;

        if !config.prefix.is_empty() {
            stem.insert_str(0, &config.prefix);
        }
        if !config.suffix.is_empty() {
            stem.push_str(&config.suffix);
        }
        if !config.insert.is_empty() {
            stem = splice(&stem, config.insert_at, &config.insert);
        }

        stem
    }

    fn apply_numbering(&self, stem: String, sequence_index: usize) -> String {
        let config = self.config;
        if config.numbering_mode == NumberingMode::None {
            return stem;
        }

        let token = numbering_token(config, sequence_index);
        match config.numbering_mode {
            NumberingMode::None => stem,
            NumberingMode::Prefix => token + &stem,
            NumberingMode::Suffix => stem + &token,
            NumberingMode::Insert => splice(&stem, config.numbering_at, &token),
        }
    }

    fn apply_extension(&self, extension: &str) -> String {
        match self.config.extension_mode {
            ExtensionMode::Same => extension.to_string(),
            ExtensionMode::Lower => extension.to_lowercase(),
            ExtensionMode::Upper => extension.to_uppercase(),
            ExtensionMode::Remove => String::new(),
            ExtensionMode::Fixed => normalize_extension(&self.config.extension_fixed),
        }
    }
}

/// Transform a single name without reusing compiled patterns.
///
/// Equivalent to `Pipeline::new(config).transform(original_name, sequence_index)`.
pub fn transform(original_name: &str, config: &RuleConfig, sequence_index: usize) -> String {
    Pipeline::new(config).transform(original_name, sequence_index)
}

fn compile_match_pattern(config: &RuleConfig) -> Option<Regex> {
    if config.regex_match.is_empty() {
        return None;
    }

    let source = if config.regex_simple {
        regex::escape(&config.regex_match).replace(r"\*", ".*")
    } else {
        config.regex_match.clone()
    };

    match Regex::new(&source) {
        Ok(re) => Some(re),
        Err(e) => {
            debug!("ignoring invalid match pattern '{}': {}", config.regex_match, e);
            None
        },
    }
}

fn compile_insensitive_replace(config: &RuleConfig) -> Option<Regex> {
    if config.replace_search.is_empty() || config.replace_match_case {
        return None;
    }

    RegexBuilder::new(&regex::escape(&config.replace_search))
        .case_insensitive(true)
        .build()
        .map_err(|e| debug!("cannot build case-insensitive replace: {}", e))
        .ok()
}

/// Byte offset of the `pos`-th character, clamped to the end of the string
fn byte_offset(s: &str, pos: usize) -> usize {
    s.char_indices().nth(pos).map_or(s.len(), |(idx, _)| idx)
}

/// Insert `text` at character position `pos`; positions past the end append
fn splice(s: &str, pos: usize, text: &str) -> String {
    let idx = byte_offset(s, pos);
    let mut out = String::with_capacity(s.len() + text.len());
    out.push_str(&s[..idx]);
    out.push_str(text);
    out.push_str(&s[idx..]);
    out
}

/// Remove the 1-based inclusive range `[from, to]`; `0` leaves an end unset
fn remove_range(s: &str, from: usize, to: usize) -> String {
    let len = s.chars().count();
    let start = from.max(1) - 1;
    if start >= len {
        return s.to_string();
    }

    let end = if to > 0 { to } else { len };
    let end = end.clamp(start, len);

    let start_byte = byte_offset(s, start);
    let end_byte = byte_offset(s, end);
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..start_byte]);
    out.push_str(&s[end_byte..]);
    out
}

fn numbering_token(config: &RuleConfig, sequence_index: usize) -> String {
    // The first item of a batch receives `numbering_start`.
    let offset = i64::try_from(sequence_index.saturating_sub(1)).unwrap_or(i64::MAX);
    let value = config
        .numbering_start
        .saturating_add(offset.saturating_mul(config.numbering_increment));
    let digits = zero_pad(value, config.numbering_pad);
    let sep = &config.numbering_separator;

    match config.numbering_mode {
        NumberingMode::Suffix => format!("{sep}{digits}"),
        _ => format!("{digits}{sep}"),
    }
}

/// Zero-pad `value` to at least `width` characters, sign included.
/// `format!` width arguments are limited to `u16`, so this pads by hand.
fn zero_pad(value: i64, width: usize) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    let zeros = width.saturating_sub(digits.len() + sign.len());
    let mut out = String::with_capacity(sign.len() + zeros + digits.len());
    out.push_str(sign);
    out.push_str(&"0".repeat(zeros));
    out.push_str(&digits);
    out
}

fn apply_case(stem: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Same => stem.to_string(),
        CaseMode::Lower => stem.to_lowercase(),
        CaseMode::Upper => stem.to_uppercase(),
        CaseMode::Title => title_case(stem),
        CaseMode::Sentence => {
            let mut chars = stem.chars();
            let mut out = String::with_capacity(stem.len());
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
            out
        },
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
