//! # Store Module Unit Tests / Store 模块单元测试
//!
//! This module contains unit tests for the execution store: the round-trip
//! law through the JSON wire format and the distinct failure conditions.
//!
//! 此模块包含执行存储的单元测试：
//! 经由 JSON 线上格式的往返定律以及各不相同的失败情况。

mod common;

use gherkin_report::core::models::ScenarioExecutionStatus;
use gherkin_report::infra::store::{self, StoreError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_stack_run_round_trips_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TestExecution.json");

        let execution = common::stack_execution();
        store::save_execution(&execution, &path).unwrap();
        let loaded = store::load_execution(&path).unwrap();

        assert_eq!(loaded, execution);
    }

    #[test]
    fn test_round_trip_preserves_step_and_tag_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ordered.json");

        let mut ordered = common::scenario(
            "ordered",
            vec![
                common::step(ScenarioExecutionStatus::Ok),
                common::step(ScenarioExecutionStatus::Skipped),
                common::step(ScenarioExecutionStatus::TestError),
            ],
        );
        ordered.tags = vec!["z".to_string(), "a".to_string(), "z".to_string()];
        let execution = common::execution(vec![ordered]);

        store::save_execution(&execution, &path).unwrap();
        let loaded = store::load_execution(&path).unwrap();

        assert_eq!(loaded, execution);
        let scenario = &loaded.features[0].scenarios[0];
        assert_eq!(scenario.tags, vec!["z", "a", "z"]);
        assert_eq!(scenario.steps[1].status, ScenarioExecutionStatus::Skipped);
    }

    #[test]
    fn test_save_replaces_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TestExecution.json");
        fs::write(&path, "stale content").unwrap();

        let execution = common::stack_execution();
        store::save_execution(&execution, &path).unwrap();

        assert_eq!(store::load_execution(&path).unwrap(), execution);
    }

    #[test]
    fn test_saved_document_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TestExecution.json");

        store::save_execution(&common::stack_execution(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.lines().count() > 1);
        assert!(content.contains("\"testProject\": \"StackSample\""));
    }
}

#[cfg(test)]
mod failure_condition_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported_as_not_found() {
        let result = store::load_execution(Path::new("tests/fixtures/does_not_exist.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_missing_required_timestamp_is_malformed_not_defaulted() {
        let result = store::load_execution(Path::new("tests/fixtures/malformed.json"));
        match result {
            Err(StoreError::Malformed { source, .. }) => {
                assert!(source.to_string().contains("executionStartTimestamp"));
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_value_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_status.json");
        let content = fs::read_to_string("tests/fixtures/stack_run.json")
            .unwrap()
            .replace("\"Ok\"", "\"Exploded\"");
        fs::write(&path, content).unwrap();

        assert!(matches!(
            store::load_execution(&path),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truncated.json");
        fs::write(&path, "{ \"testProject\": \"Stack").unwrap();

        assert!(matches!(
            store::load_execution(&path),
            Err(StoreError::Malformed { .. })
        ));
    }
}

#[cfg(test)]
mod producer_compatibility_tests {
    use super::*;

    #[test]
    fn test_camel_case_fixture_loads() {
        let loaded = store::load_execution(Path::new("tests/fixtures/stack_run.json")).unwrap();
        assert_eq!(loaded, common::stack_execution());
    }

    #[test]
    fn test_pascal_case_fixture_loads_equal_to_camel_case() {
        // The original producer wrote PascalCase field names and mixed-case
        // status tokens; both spellings decode to the same tree.
        let pascal = store::load_execution(Path::new("tests/fixtures/pascal_case.json")).unwrap();
        let camel = store::load_execution(Path::new("tests/fixtures/stack_run.json")).unwrap();
        assert_eq!(pascal, camel);
    }
}
