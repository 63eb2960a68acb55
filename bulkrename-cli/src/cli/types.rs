use bulkrename_core::{CaseMode, ExtensionMode, NameMode, NumberingMode, Preview};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NameModeArg {
    Keep,
    Remove,
    Fixed,
    Reverse,
}

impl From<NameModeArg> for NameMode {
    fn from(arg: NameModeArg) -> Self {
        match arg {
            NameModeArg::Keep => Self::Keep,
            NameModeArg::Remove => Self::Remove,
            NameModeArg::Fixed => Self::Fixed,
            NameModeArg::Reverse => Self::Reverse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    Same,
    Lower,
    Upper,
    Title,
    /// First letter uppercase, everything else lowercase
    Sentence,
}

impl From<CaseArg> for CaseMode {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Same => Self::Same,
            CaseArg::Lower => Self::Lower,
            CaseArg::Upper => Self::Upper,
            CaseArg::Title => Self::Title,
            CaseArg::Sentence => Self::Sentence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberArg {
    None,
    Prefix,
    Suffix,
    /// Insert at the position given by --number-at
    Insert,
}

impl From<NumberArg> for NumberingMode {
    fn from(arg: NumberArg) -> Self {
        match arg {
            NumberArg::None => Self::None,
            NumberArg::Prefix => Self::Prefix,
            NumberArg::Suffix => Self::Suffix,
            NumberArg::Insert => Self::Insert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtArg {
    Same,
    Lower,
    Upper,
    Remove,
    Fixed,
}

impl From<ExtArg> for ExtensionMode {
    fn from(arg: ExtArg) -> Self {
        match arg {
            ExtArg::Same => Self::Same,
            ExtArg::Lower => Self::Lower,
            ExtArg::Upper => Self::Upper,
            ExtArg::Remove => Self::Remove,
            ExtArg::Fixed => Self::Fixed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    Table,
    Diff,
    Summary,
    Json,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Diff => Self::Diff,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::Json => Self::Json,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for bulkrename_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
