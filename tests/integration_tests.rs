// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading and querying properties.
//!
//! These tests go through the public facade: files and streams in, typed
//! values and structural queries out.

mod common;

use common::{temp_config_file, INVALID_CONFIGURATION, VALID_CONFIGURATION};
use keyprops::prelude::*;
use std::collections::BTreeSet;
use std::io::Cursor;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_file_and_read_values() {
    let file = temp_config_file(VALID_CONFIGURATION);
    let props = Properties::load_file(file.path()).unwrap();

    assert_eq!(props.get_string("source").unwrap(), "some source");
    assert_eq!(props.get_string("destination").unwrap(), "some destination");
    assert_eq!(props.get_int("bind_port").unwrap(), 9345);
    assert_eq!(props.get_float("section1.float").unwrap(), 4.5);
    assert!(props.get_bool("section1.bool.true").unwrap());
    assert!(!props.get_bool("section1.bool.false").unwrap());
}

#[test]
fn test_structural_queries() {
    let props = Properties::load(Cursor::new(VALID_CONFIGURATION)).unwrap();

    assert_eq!(props.subkeys("section1").unwrap(), set(&["float", "bool"]));
    assert_eq!(props.subkeys("section1.bool").unwrap(), set(&["true", "false"]));
    assert_eq!(
        props.subkeys("").unwrap(),
        set(&["source", "destination", "bind_port", "section1"])
    );

    assert!(props.key_exists("section1"));
    assert!(props.key_exists("section1.bool.true"));
    assert!(!props.key_exists("non_existent"));
}

#[test]
fn test_section_without_value() {
    let props = Properties::load(Cursor::new(VALID_CONFIGURATION)).unwrap();

    assert!(props.key_exists("section1"));
    assert!(matches!(
        props.get_string("section1"),
        Err(PropertiesError::NoValue { ref key }) if key == "section1"
    ));
}

#[test]
fn test_missing_key_is_not_found() {
    let props = Properties::load(Cursor::new(VALID_CONFIGURATION)).unwrap();

    let err = props.get_string("missing").unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, PropertiesError::NodeNotFound));
    assert!(props.subkeys("missing").unwrap_err().is_not_found());
}

#[test]
fn test_invalid_configuration_fails_whole_load() {
    let file = temp_config_file(INVALID_CONFIGURATION);
    let err = Properties::load_file(file.path()).unwrap_err();

    match err {
        PropertiesError::ParseError { line_number, line } => {
            assert_eq!(line_number, 3);
            assert_eq!(line, "this is an invalid line");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_later_section_overrides_prefix() {
    let props: Properties = "\
[first]
key = 1
[second]
key = 2
"
    .parse()
    .unwrap();

    assert_eq!(props.get_int("first.key").unwrap(), 1);
    assert_eq!(props.get_int("second.key").unwrap(), 2);
    assert_eq!(props.subkeys("").unwrap(), set(&["first", "second"]));
}

#[test]
fn test_duplicate_assignment_keeps_last_value() {
    let props: Properties = "port = 80\nport = 8080\n".parse().unwrap();

    assert_eq!(props.get_int("port").unwrap(), 8080);
    assert_eq!(props.keys(), vec![PropertyKey::from("port")]);
}

#[test]
fn test_value_assigned_to_existing_section() {
    let props: Properties = "section1.float = 4.5\nsection1 = direct\n".parse().unwrap();

    assert_eq!(props.get_string("section1").unwrap(), "direct");
    assert_eq!(props.get_float("section1.float").unwrap(), 4.5);
    assert_eq!(props.subkeys("section1").unwrap(), set(&["float"]));
}

#[test]
fn test_empty_value_has_no_value() {
    let props: Properties = "empty =\n".parse().unwrap();

    assert!(props.key_exists("empty"));
    assert!(matches!(
        props.get_string("empty"),
        Err(PropertiesError::NoValue { .. })
    ));
}

#[test]
fn test_escaped_comment_marker_in_value() {
    let props: Properties = r"color = \#00ff00 # green".parse().unwrap();
    assert_eq!(props.get_string("color").unwrap(), "#00ff00");
}

#[test]
fn test_escaped_backslash_before_comment_marker() {
    let props: Properties = "a = x\\\\#y\nb = x\\\\\\#y\npath = C:\\temp\n".parse().unwrap();
    assert_eq!(props.get_string("a").unwrap(), r"x\");
    assert_eq!(props.get_string("b").unwrap(), r"x\#y");
    assert_eq!(props.get_string("path").unwrap(), r"C:\temp");
}

#[test]
fn test_conversion_errors_carry_value_context() {
    let props: Properties = "flag = maybe\ncount = many\nratio = n/a\n".parse().unwrap();

    let err = props.get_bool("flag").unwrap_err();
    assert!(err.to_string().contains("maybe"));

    assert!(matches!(
        props.get_int("count"),
        Err(PropertiesError::TypeConversionError { .. })
    ));
    assert!(matches!(
        props.get_float("ratio"),
        Err(PropertiesError::TypeConversionError { .. })
    ));
}

#[test]
fn test_load_nonexistent_file() {
    let result = Properties::load_file("/nonexistent/keyprops/config.ini");
    assert!(matches!(result, Err(PropertiesError::SourceError { .. })));
}

#[test]
fn test_shared_across_threads() {
    let props = std::sync::Arc::new(Properties::load(Cursor::new(VALID_CONFIGURATION)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let props = std::sync::Arc::clone(&props);
            std::thread::spawn(move || props.get_int("bind_port").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 9345);
    }
}
