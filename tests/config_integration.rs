use quill::config::{
    ConfigOverrides, Options, clear_config, load_config, parse_config, save_config,
};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".quillrc");
    let content = r"
# comment
tabsize 8

show_linenumbers=on
   
message_cooldown = 5
";
    std::fs::write(&path, content).unwrap();

    let overrides = load_config(&path).unwrap();
    assert_eq!(overrides.tabsize, Some(8));
    assert_eq!(overrides.show_linenumbers, Some(true));
    assert_eq!(overrides.message_cooldown, Some(5));
}

#[test]
fn test_cli_overrides_beat_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".quillrc");
    std::fs::write(&path, "tabsize 8\nshow_linenumbers yes\n").unwrap();

    let file = load_config(&path).unwrap();
    let cli = ConfigOverrides {
        tabsize: Some(2),
        ..ConfigOverrides::default()
    };

    let options = file.union(&cli).resolve();
    assert_eq!(options.tabsize, 2, "cli should override tabsize");
    assert!(
        options.show_linenumbers,
        "file config should be preserved when cli does not override"
    );
    assert_eq!(options.message_cooldown, Options::default().message_cooldown);
}

#[test]
fn test_local_file_layers_over_global() {
    let global = parse_config("tabsize 8\nmessage_cooldown 4\n");
    let local = parse_config("tabsize 3\n");
    let options = global.union(&local).resolve();
    assert_eq!(options.tabsize, 3);
    assert_eq!(options.message_cooldown, 4);
}

#[test]
fn test_bad_lines_are_skipped() {
    let overrides = parse_config("tabsize 0\nwrap on\nshow_linenumbers maybe\nmessage_cooldown 7\n");
    assert_eq!(overrides.tabsize, None);
    assert_eq!(overrides.show_linenumbers, None);
    assert_eq!(overrides.message_cooldown, Some(7));
}

#[test]
fn test_missing_config_file_sets_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let overrides = load_config(&dir.path().join("absent")).unwrap();
    assert_eq!(overrides, ConfigOverrides::default());
}

#[test]
fn test_save_then_clear_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config");
    let saved = ConfigOverrides {
        tabsize: Some(6),
        message_cooldown: None,
        show_linenumbers: Some(false),
    };

    save_config(&path, &saved).unwrap();
    assert_eq!(load_config(&path).unwrap(), saved);

    clear_config(&path).unwrap();
    assert!(!path.exists());
    clear_config(&path).unwrap();
}
