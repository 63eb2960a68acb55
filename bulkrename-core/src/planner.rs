use crate::executor::RenameResult;
use crate::pipeline::Pipeline;
use crate::rules::RuleConfig;
use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

/// New name -> indices of every item that computed it, for names shared by
/// more than one item
pub type CollisionMap = BTreeMap<String, Vec<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// New name equals the original name
    #[default]
    Unchanged,
    /// Will be renamed
    Pending,
    /// Shares its new name with at least one other item in the batch
    Collision,
    /// A rename was attempted and failed
    Error,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unchanged => "unchanged",
            Self::Pending => "pending",
            Self::Collision => "collision",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// One file under consideration for renaming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileItem {
    /// Absolute path of the file as it was listed
    pub path: PathBuf,
    pub original_name: String,
    /// Derived from `original_name`, the rules and the item's position
    pub new_name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
    pub status: ItemStatus,
}

impl FileItem {
    pub fn new(
        path: PathBuf,
        original_name: String,
        size: u64,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            path,
            new_name: original_name.clone(),
            original_name,
            size,
            modified,
            status: ItemStatus::Unchanged,
        }
    }

    /// Put the item back into its freshly-loaded state
    pub fn reset(&mut self) {
        self.new_name.clone_from(&self.original_name);
        self.status = ItemStatus::Unchanged;
    }

    pub fn is_changed(&self) -> bool {
        self.new_name != self.original_name
    }

    /// Path the item will have after renaming, in the same parent directory
    pub fn target_path(&self) -> PathBuf {
        self.path.with_file_name(&self.new_name)
    }
}

/// A batch with computed new names, ready to preview or execute
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenamePlan {
    pub items: Vec<FileItem>,
    pub collisions: CollisionMap,
}

impl RenamePlan {
    /// Execution is only allowed while no item collides
    pub fn is_executable(&self) -> bool {
        self.collisions.is_empty()
    }

    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.count_status(ItemStatus::Pending)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count_status(ItemStatus::Unchanged)
    }

    pub fn collision_count(&self) -> usize {
        self.count_status(ItemStatus::Collision)
    }

    fn count_status(&self, status: ItemStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    /// Items that would actually be renamed
    pub fn changed(&self) -> impl Iterator<Item = &FileItem> {
        self.items.iter().filter(|i| i.is_changed())
    }

    /// Mark every item that failed during execution with `ItemStatus::Error`
    pub fn record_result(&mut self, result: &RenameResult) {
        for failure in &result.failures {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|i| i.original_name == failure.original_name)
            {
                item.status = ItemStatus::Error;
            }
        }
    }
}

/// Recompute `new_name` and `status` for every item in place.
///
/// Item `i` (0-based) is transformed with sequence index `i + 1`. Returns
/// the collision map built during the pass.
pub fn update_previews(items: &mut [FileItem], config: &RuleConfig) -> CollisionMap {
    let pipeline = Pipeline::new(config);
    // Skip the stages entirely when none of them can change a name
    let identity = config.is_identity();

    let mut by_name: HashMap<String, Vec<usize>> = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter_mut().enumerate() {
        item.new_name = if identity {
            item.original_name.clone()
        } else {
            pipeline.transform(&item.original_name, idx + 1)
        };
        item.status = if item.is_changed() {
            ItemStatus::Pending
        } else {
            ItemStatus::Unchanged
        };
        by_name.entry(item.new_name.clone()).or_default().push(idx);
    }

    let collisions: CollisionMap = by_name
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .collect();

    for indices in collisions.values() {
        for &idx in indices {
            items[idx].status = ItemStatus::Collision;
        }
    }

    debug!(
        "planned {} items, {} colliding names (identity rules: {})",
        items.len(),
        collisions.len(),
        identity
    );

    collisions
}

/// Build a plan for `items` in their given order. No filesystem access.
pub fn plan(items: Vec<FileItem>, config: &RuleConfig) -> RenamePlan {
    let mut items = items;
    let collisions = update_previews(&mut items, config);
    RenamePlan { items, collisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{NameMode, NumberingMode};

    fn items(names: &[&str]) -> Vec<FileItem> {
        names
            .iter()
            .map(|n| FileItem::new(PathBuf::from("/batch").join(n), (*n).to_string(), 0, None))
            .collect()
    }

    #[test]
    fn test_identity_plan_is_all_unchanged() {
        let plan = plan(items(&["a.txt", "b.txt"]), &RuleConfig::default());
        assert_eq!(plan.unchanged_count(), 2);
        assert!(plan.is_executable());
        assert_eq!(plan.changed().count(), 0);
    }

    #[test]
    fn test_numbering_uses_position() {
        let config = RuleConfig {
            numbering_mode: NumberingMode::Suffix,
            numbering_pad: 2,
            numbering_separator: "_".to_string(),
            ..Default::default()
        };
        let plan = plan(items(&["a.txt", "b.txt"]), &config);
        let names: Vec<_> = plan.items.iter().map(|i| i.new_name.as_str()).collect();
        assert_eq!(names, vec!["a_01.txt", "b_02.txt"]);
        assert_eq!(plan.pending_count(), 2);
    }

    #[test]
    fn test_fixed_name_collides_for_all_members() {
        let config = RuleConfig {
            name_mode: NameMode::Fixed,
            name_fixed: "x".to_string(),
            ..Default::default()
        };
        let plan = plan(items(&["foo.txt", "bar.txt", "baz.md"]), &config);

        assert_eq!(plan.items[0].status, ItemStatus::Collision);
        assert_eq!(plan.items[1].status, ItemStatus::Collision);
        assert_eq!(plan.items[2].status, ItemStatus::Pending);
        assert_eq!(plan.collisions.len(), 1);
        assert_eq!(plan.collisions["x.txt"], vec![0, 1]);
        assert!(!plan.is_executable());
    }

    #[test]
    fn test_unchanged_item_can_collide_with_renamed_item() {
        let config = RuleConfig {
            replace_search: "-copy".to_string(),
            replace_match_case: true,
            ..Default::default()
        };
        let plan = plan(items(&["doc.txt", "doc-copy.txt"]), &config);
        assert_eq!(plan.items[0].status, ItemStatus::Collision);
        assert_eq!(plan.items[1].status, ItemStatus::Collision);
    }

    #[test]
    fn test_update_previews_is_repeatable() {
        let mut batch = items(&["one.txt", "two.txt"]);
        let upper = RuleConfig {
            case_mode: crate::rules::CaseMode::Upper,
            ..Default::default()
        };
        update_previews(&mut batch, &upper);
        assert_eq!(batch[0].new_name, "ONE.txt");

        update_previews(&mut batch, &RuleConfig::default());
        assert_eq!(batch[0].new_name, "one.txt");
        assert_eq!(batch[0].status, ItemStatus::Unchanged);
    }

    #[test]
    fn test_identity_rules_still_report_duplicate_names() {
        let mut batch = items(&["same.txt", "same.txt", "other.txt"]);
        let collisions = update_previews(&mut batch, &RuleConfig::default());

        assert_eq!(collisions["same.txt"], vec![0, 1]);
        assert_eq!(batch[0].status, ItemStatus::Collision);
        assert_eq!(batch[2].status, ItemStatus::Unchanged);
        assert_eq!(batch[2].new_name, "other.txt");
    }

    #[test]
    fn test_reset_and_target_path() {
        let mut item = FileItem::new(PathBuf::from("/dir/a.txt"), "a.txt".to_string(), 3, None);
        item.new_name = "b.txt".to_string();
        item.status = ItemStatus::Pending;
        assert_eq!(item.target_path(), PathBuf::from("/dir/b.txt"));

        item.reset();
        assert_eq!(item.new_name, "a.txt");
        assert_eq!(item.status, ItemStatus::Unchanged);
    }

    #[test]
    fn test_record_result_marks_errors() {
        let config = RuleConfig {
            prefix: "x".to_string(),
            ..Default::default()
        };
        let mut plan = plan(items(&["a", "b"]), &config);
        let result = RenameResult {
            success_count: 1,
            renamed: vec![("a".to_string(), "xa".to_string())],
            failures: vec![crate::executor::RenameFailure {
                original_name: "b".to_string(),
                new_name: "xb".to_string(),
                message: "permission denied".to_string(),
            }],
        };
        plan.record_result(&result);
        assert_eq!(plan.items[0].status, ItemStatus::Pending);
        assert_eq!(plan.items[1].status, ItemStatus::Error);
    }
}
