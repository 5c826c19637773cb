//! Integration tests for the ice-properties public API.
//!
//! These tests drive the store the way a runtime does at startup: bootstrap
//! from arguments, load the named file, then pull out prefixed options and
//! read typed values.

use std::path::PathBuf;
use std::sync::Arc;

use ice_properties::{
    parse_flag, parse_line, MapEnvironment, PropertiesError, PropertyStore, CONFIG_PROPERTY,
    CONFIG_PROPERTY_PREFIX,
};
use uuid::Uuid;

/// Creates a unique temp directory holding `config.cfg` with `contents`.
fn write_config(contents: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("ice_it_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("config.cfg");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

fn empty_env() -> Arc<MapEnvironment> {
    Arc::new(MapEnvironment::new())
}

#[test]
fn test_startup_sequence_file_then_command_line_overrides() {
    // Arrange
    let (dir, path) = write_config(
        "# server configuration\n\
         Ice.Trace.Network=1\n\
         Ice.ThreadPool.Server.Size = 4\n\
         Hello.Endpoints=tcp -p 10000 # public\n",
    );
    let args = vec![
        "hello-server".to_string(),
        format!("--Ice.Config={}", path.display()),
        "--Ice.Trace.Network=3".to_string(),
        "--Ice.Warn.Connections".to_string(),
        "--verbose".to_string(),
    ];

    // Act
    let (store, rest) =
        PropertyStore::from_args_with_environment(args, empty_env()).expect("bootstrap");
    let rest = store.parse_command_line_options(CONFIG_PROPERTY_PREFIX, rest);

    // Assert
    assert_eq!(rest, vec!["hello-server", "--verbose"]);
    assert_eq!(store.get_property_as_int("Ice.Trace.Network"), 3, "command line wins");
    assert_eq!(store.get_property_as_int("Ice.ThreadPool.Server.Size"), 4);
    assert_eq!(store.get_property("Ice.Warn.Connections"), "1");
    assert_eq!(store.get_property("Hello.Endpoints"), "tcp -p 10000");
    assert_eq!(store.get_property(CONFIG_PROPERTY), path.display().to_string());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_bootstrap_fails_for_unreadable_config() {
    let missing = std::env::temp_dir().join(format!("ice_it_missing_{}.cfg", Uuid::new_v4()));

    let result = PropertyStore::from_args_with_environment(
        [format!("--Ice.Config={}", missing.display())],
        empty_env(),
    );

    match result {
        Err(PropertiesError::Io { path, .. }) => assert_eq!(path, missing),
        Ok(_) => panic!("bootstrap must fail when the config file is missing"),
    }
}

#[test]
fn test_environment_fallback_and_defaults() {
    // Arrange
    let env = MapEnvironment::new()
        .with("Ice.Default.Host", "192.168.1.10")
        .with("Ice.RetryIntervals", "0 100 500");
    let store = PropertyStore::with_environment(Arc::new(env));
    store.set_property("Ice.Default.Host", "localhost");

    // Act / Assert
    assert_eq!(store.get_property("Ice.Default.Host"), "localhost");
    assert_eq!(store.get_property("Ice.RetryIntervals"), "0 100 500");
    assert_eq!(store.get_property_as_int_with_default("Ice.RetryIntervals", 5), 0);
    assert_eq!(store.get_property_as_int_with_default("Ice.Unset", 5), 5);
    assert_eq!(store.get_property_with_default("Ice.Unset", "dflt"), "dflt");
}

#[test]
fn test_get_properties_selects_exact_prefix_among_many_entries() {
    // Arrange – interleave matching and non-matching keys
    let store = PropertyStore::with_environment(empty_env());
    for i in 0..200 {
        store.set_property(format!("Ice.Key{i}"), i.to_string());
        store.set_property(format!("IceStorm.Key{i}"), i.to_string());
        store.set_property(format!("Other.Ice.Key{i}"), i.to_string());
    }

    // Act
    let selected = store.get_properties("Ice.");

    // Assert
    assert_eq!(selected.len(), 200);
    assert!(selected.iter().all(|(k, _)| k.starts_with("Ice.")));
}

#[test]
fn test_command_line_round_trip_through_line_parser() {
    // Arrange
    let store = PropertyStore::with_environment(empty_env());
    store.set_property("Ice.Trace.Network", "2");
    store.set_property("Hello.Proxy", "hello:tcp -h localhost -p 10000");
    store.set_property("Ice.Empty", "");

    // Act
    let options = store.get_command_line_options();

    // Assert – every option re-parses to the entry it came from
    assert_eq!(options.len(), 3);
    for option in &options {
        let body = option.strip_prefix("--").expect("options start with --");
        let (key, value) = parse_line(body).expect("option must re-parse");
        assert_eq!(store.get_property(key), value);
    }
}

#[test]
fn test_options_replayed_into_new_store_reproduce_snapshot() {
    let original = PropertyStore::with_environment(empty_env());
    original.set_property("Ice.Trace.Protocol", "1");
    original.set_property("Ice.Override.Timeout", "2000");

    let replay = PropertyStore::with_environment(empty_env());
    let rest = replay.parse_command_line_options("Ice", original.get_command_line_options());

    assert!(rest.is_empty());
    assert_eq!(replay.snapshot(), original.snapshot());
}

#[test]
fn test_clone_then_diverge() {
    let base = PropertyStore::with_environment(empty_env());
    base.parse_command_line_options("Ice", ["--Ice.Trace.Network=1"]);

    let per_adapter = base.clone();
    per_adapter.set_property("Ice.Trace.Network", "3");

    assert_eq!(base.get_property("Ice.Trace.Network"), "1");
    assert_eq!(per_adapter.get_property("Ice.Trace.Network"), "3");
}

#[test]
fn test_parse_flag_and_line_agree_on_explicit_values() {
    for token in ["--Ice.A=1", "--Ice.B = two ", "--Ice.C="] {
        let from_flag = parse_flag(token).expect("flag parses");
        let (key, value) = parse_line(&token[2..]).expect("line parses");
        assert_eq!(from_flag, (key.to_string(), value.to_string()));
    }
}
