#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod executor;
pub mod filename;
pub mod listing;
pub mod operations;
pub mod output;
pub mod pipeline;
pub mod planner;
pub mod preview;
pub mod rules;

pub use config::{load_rules, Config, DefaultsConfig};
pub use error::RenameError;
pub use executor::{execute, RenameFailure, RenameResult};
pub use filename::{normalize_extension, split_name};
pub use listing::load_directory;
pub use operations::{preview_operation, rename_operation, RenameOptions};
pub use output::{
    ExecuteResult, OutputFormat, OutputFormatter, PreviewResult, VersionResult,
};
pub use pipeline::{transform, Pipeline};
pub use planner::{plan, update_previews, CollisionMap, FileItem, ItemStatus, RenamePlan};
pub use preview::{render_plan, write_preview, Preview};
pub use rules::{CaseMode, ExtensionMode, NameMode, NumberingMode, RuleConfig, RuleParseError};
