use bulkrename_core::{
    plan, split_name, transform, update_previews, CaseMode, ExtensionMode, FileItem, ItemStatus,
    NameMode, NumberingMode, RuleConfig,
};
use std::path::PathBuf;

fn batch(names: &[&str]) -> Vec<FileItem> {
    names
        .iter()
        .map(|n| FileItem::new(PathBuf::from("/photos").join(n), (*n).to_string(), 0, None))
        .collect()
}

fn new_names(items: &[FileItem]) -> Vec<&str> {
    items.iter().map(|i| i.new_name.as_str()).collect()
}

#[test]
fn test_extension_splitting() {
    assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
    assert_eq!(split_name(".gitignore"), (".gitignore", ""));
    assert_eq!(split_name("README"), ("README", ""));
}

#[test]
fn test_suffix_numbering_scenario() {
    let config = RuleConfig {
        numbering_mode: NumberingMode::Suffix,
        numbering_start: 1,
        numbering_pad: 2,
        numbering_separator: "_".to_string(),
        ..Default::default()
    };

    let plan = plan(batch(&["a.txt", "b.txt"]), &config);

    assert_eq!(new_names(&plan.items), vec!["a_01.txt", "b_02.txt"]);
    assert!(plan.items.iter().all(|i| i.status == ItemStatus::Pending));
    assert!(plan.is_executable());
}

#[test]
fn test_fixed_name_collision_scenario() {
    let config = RuleConfig {
        name_mode: NameMode::Fixed,
        name_fixed: "x".to_string(),
        ..Default::default()
    };

    let plan = plan(batch(&["foo.txt", "bar.txt"]), &config);

    assert_eq!(new_names(&plan.items), vec!["x.txt", "x.txt"]);
    assert!(plan.items.iter().all(|i| i.status == ItemStatus::Collision));
    assert_eq!(plan.collisions["x.txt"], vec![0, 1]);
    assert!(!plan.is_executable());
}

#[test]
fn test_range_removal_boundary() {
    let config = RuleConfig {
        remove_from: 2,
        remove_to: 4,
        ..Default::default()
    };
    assert_eq!(transform("abcdef", &config, 1), "aef");
    assert_eq!(transform("abcdef.txt", &config, 1), "aef.txt");
}

#[test]
fn test_stages_run_in_order() {
    // pattern -> name -> replace -> removal -> insertion -> numbering -> case, then extension
    let config = RuleConfig {
        regex_match: r"IMG_(\d+)".to_string(),
        regex_replace: "photo-$1".to_string(),
        replace_search: "PHOTO".to_string(),
        replace_with: "Shot".to_string(),
        remove_chars: "-".to_string(),
        prefix: "trip ".to_string(),
        numbering_mode: NumberingMode::Suffix,
        numbering_pad: 3,
        numbering_separator: " #".to_string(),
        case_mode: CaseMode::Title,
        extension_mode: ExtensionMode::Lower,
        ..Default::default()
    };

    assert_eq!(transform("IMG_0042.JPG", &config, 7), "Trip Shot0042 #007.jpg");
}

#[test]
fn test_case_runs_after_numbering_and_insertion() {
    let config = RuleConfig {
        prefix: "Draft_".to_string(),
        numbering_mode: NumberingMode::Prefix,
        numbering_separator: "X".to_string(),
        case_mode: CaseMode::Lower,
        ..Default::default()
    };
    assert_eq!(transform("Notes.TXT", &config, 1), "1xdraft_notes.TXT");
}

#[test]
fn test_pattern_applies_to_stem_only() {
    let config = RuleConfig {
        regex_match: "txt".to_string(),
        regex_replace: "doc".to_string(),
        ..Default::default()
    };
    assert_eq!(transform("txt.txt", &config, 1), "doc.txt");
}

#[test]
fn test_update_previews_after_rule_change() {
    let mut items = batch(&["one.txt", "two.txt", "three.txt"]);

    let upper = RuleConfig {
        case_mode: CaseMode::Upper,
        ..Default::default()
    };
    let collisions = update_previews(&mut items, &upper);
    assert!(collisions.is_empty());
    assert_eq!(new_names(&items), vec!["ONE.txt", "TWO.txt", "THREE.txt"]);

    let cleared = RuleConfig {
        name_mode: NameMode::Remove,
        ..Default::default()
    };
    let collisions = update_previews(&mut items, &cleared);
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[".txt"], vec![0, 1, 2]);
    assert!(items.iter().all(|i| i.status == ItemStatus::Collision));

    let collisions = update_previews(&mut items, &RuleConfig::default());
    assert!(collisions.is_empty());
    assert!(items.iter().all(|i| i.status == ItemStatus::Unchanged));
}

#[test]
fn test_numbering_follows_batch_position_not_name() {
    let config = RuleConfig {
        name_mode: NameMode::Remove,
        numbering_mode: NumberingMode::Prefix,
        numbering_start: 10,
        numbering_increment: 5,
        ..Default::default()
    };

    let plan = plan(batch(&["z.jpg", "a.jpg", "m.jpg"]), &config);

    assert_eq!(new_names(&plan.items), vec!["10.jpg", "15.jpg", "20.jpg"]);
}
