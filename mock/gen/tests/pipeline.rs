//! End-to-end tests: definition files in, mock files out.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use mock_gen::{GeneratorConfig, GeneratorError, OutputMode, run};

fn write_definitions(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("Failed to write definition file");
    }
}

fn mock_path(dir: &Path, name: &str) -> PathBuf {
    dir.join("mocks").join(name)
}

fn read_mock(dir: &Path, name: &str) -> String {
    fs::read_to_string(mock_path(dir, name)).expect("mock file should exist")
}

fn method_names(code: &str) -> Vec<String> {
    code.lines()
        .filter_map(|line| line.trim_start().strip_prefix("pub fn "))
        .filter_map(|rest| rest.split('(').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn item_definition_produces_expected_methods() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[("item.rs", "pub struct Item {\n    pub name: String,\n    pub count: i32,\n}\n")],
    );

    let summary = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.outputs, vec![mock_path(temp_dir.path(), "item_mock.rs")]);

    let code = read_mock(temp_dir.path(), "item_mock.rs");
    assert_eq!(
        method_names(&code),
        vec!["set_name", "get_name", "set_count", "get_count", "query", "execute"]
    );
    assert!(code.contains("use crate::item;"));
    assert!(code.contains("pub fn set_name(&mut self, value: String)"));
    assert!(code.contains("pub fn get_name(&self) -> String"));
    assert!(code.contains("pub fn set_count(&mut self, value: i32)"));
    assert!(code.contains("pub fn get_count(&self) -> i32"));
    assert!(code.contains("pub fn query(&self) -> String"));
    assert!(code.contains("pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>>"));
}

#[test]
fn rerun_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[
            ("item.rs", "pub struct Item { pub name: String, pub tags: Vec<String> }"),
            ("pair.rs", "pub struct Pair(pub u8, pub u8);"),
        ],
    );
    let config = GeneratorConfig::with_input_dir(temp_dir.path());

    run(&config).expect("first run");
    let first_item = read_mock(temp_dir.path(), "item_mock.rs");
    let first_pair = read_mock(temp_dir.path(), "pair_mock.rs");

    run(&config).expect("second run");
    assert_eq!(first_item, read_mock(temp_dir.path(), "item_mock.rs"));
    assert_eq!(first_pair, read_mock(temp_dir.path(), "pair_mock.rs"));
}

#[test]
fn file_without_structs_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[("helpers.rs", "pub type Id = u64;\npub fn helper() {}\npub trait Store {}")],
    );

    let summary = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");
    assert_eq!(summary.files_processed, 1);
    assert!(summary.outputs.is_empty());
    assert!(temp_dir.path().join("mocks").is_dir());
    assert!(!mock_path(temp_dir.path(), "helpers_mock.rs").exists());
}

#[test]
fn non_definition_files_are_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[
            ("item.rs", "pub struct Item { pub name: String }"),
            ("item.go", "package item\n\ntype Item struct { Name string }"),
            ("broken.txt", "struct Broken {"),
        ],
    );

    let summary = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");
    assert_eq!(summary.files_processed, 1);

    let mut written: Vec<String> = fs::read_dir(temp_dir.path().join("mocks"))
        .expect("mocks dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["item_mock.rs"]);
}

#[test]
fn last_struct_wins_in_per_file_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[(
            "orders.rs",
            "pub struct Order { pub id: u64 }\npub enum Status { Open }\npub struct OrderLine { pub sku: String, pub qty: u32 }",
        )],
    );

    run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");

    let code = read_mock(temp_dir.path(), "orders_mock.rs");
    assert!(code.contains("impl orders::OrderLine"));
    assert!(!code.contains("impl orders::Order {"));
    assert_eq!(
        method_names(&code),
        vec!["set_sku", "get_sku", "set_qty", "get_qty", "query", "execute"]
    );
}

#[test]
fn per_type_mode_writes_one_file_per_struct() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[(
            "orders.rs",
            "pub struct Order { pub id: u64 }\npub struct OrderLine { pub sku: String }",
        )],
    );

    let config = GeneratorConfig::with_input_dir(temp_dir.path()).output_mode(OutputMode::PerType);
    let summary = run(&config).expect("run succeeds");
    assert_eq!(summary.outputs.len(), 2);

    let order = read_mock(temp_dir.path(), "orders_order_mock.rs");
    let line = read_mock(temp_dir.path(), "orders_order_line_mock.rs");
    assert!(order.contains("impl orders::Order {"));
    assert!(line.contains("impl orders::OrderLine {"));
}

#[test]
fn separately_declared_fields_each_get_accessors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(temp_dir.path(), &[("point.rs", "pub struct Point { pub x: i32, pub y: i32 }")]);

    run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");

    let code = read_mock(temp_dir.path(), "point_mock.rs");
    assert_eq!(
        method_names(&code),
        vec!["set_x", "get_x", "set_y", "get_y", "query", "execute"]
    );
}

#[test]
fn existing_mock_is_overwritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(temp_dir.path(), &[("item.rs", "pub struct Item { pub name: String }")]);
    fs::create_dir(temp_dir.path().join("mocks")).expect("mkdir");
    fs::write(mock_path(temp_dir.path(), "item_mock.rs"), "stale").expect("seed");

    run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect("run succeeds");
    assert_ne!(read_mock(temp_dir.path(), "item_mock.rs"), "stale");
}

#[test]
fn parse_failure_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(temp_dir.path(), &[("broken.rs", "pub struct Broken { name: }")]);

    let err = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect_err("run fails");
    assert!(matches!(err, GeneratorError::ParseError { .. }));
}

#[test]
fn unusable_module_name_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(temp_dir.path(), &[("my-types.rs", "pub struct Item { pub name: String }")]);

    let err = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect_err("run fails");
    assert!(matches!(err, GeneratorError::InvalidModuleName { .. }));
}

#[test]
fn output_path_collision_with_directory_is_a_write_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(temp_dir.path(), &[("item.rs", "pub struct Item { pub name: String }")]);
    // A directory occupying the output path makes the final rename fail.
    fs::create_dir_all(mock_path(temp_dir.path(), "item_mock.rs").join("occupied")).expect("mkdir");

    let err = run(&GeneratorConfig::with_input_dir(temp_dir.path())).expect_err("run fails");
    assert!(matches!(err, GeneratorError::WriteError { .. }));
    assert!(!mock_path(temp_dir.path(), "item_mock.tmp").exists());
}

#[test]
fn per_type_mode_refuses_to_overwrite_its_own_outputs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_definitions(
        temp_dir.path(),
        &[("models.rs", "pub struct Foo { pub a: u8 }\npub struct FOO { pub b: u8 }")],
    );

    let config = GeneratorConfig::with_input_dir(temp_dir.path()).output_mode(OutputMode::PerType);
    let err = run(&config).expect_err("run fails");
    assert!(matches!(err, GeneratorError::OutputCollision { .. }));
    assert!(!mock_path(temp_dir.path(), "models_foo_mock.rs").exists());
}
