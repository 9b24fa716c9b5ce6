use std::fs;
use std::path::PathBuf;

use exhume::proto::common::{TaskQueue, WorkflowType};
use exhume::proto::enums::{EventType, RetryState, WorkflowTaskFailedCause};
use exhume::proto::export::{WorkflowExecution, WorkflowExecutions};
use exhume::proto::failure::Failure;
use exhume::proto::history::{
    history_event::Attributes, History, HistoryEvent, WorkflowExecutionFailedEventAttributes,
    WorkflowExecutionStartedEventAttributes, WorkflowTaskFailedEventAttributes,
};
use exhume::serde::prost::Prost;
use exhume::serde::Serializer;
use exhume::Error;
use tempfile::TempDir;

fn write_container(dir: &TempDir, name: &str, container: WorkflowExecutions) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, Prost::new().serialize(container)).unwrap();
    path
}

fn event(event_id: i64, event_type: EventType, attributes: Option<Attributes>) -> HistoryEvent {
    HistoryEvent {
        event_id,
        event_time: Some(prost_types::Timestamp {
            seconds: 1_700_000_000 + event_id,
            nanos: 0,
        }),
        event_type: event_type as i32,
        task_id: 1_048_576 + event_id,
        attributes,
        ..Default::default()
    }
}

/// A started / task-failed / execution-failed history, the shape produced
/// by a workflow worker hitting a non-deterministic replay error.
fn non_deterministic_failure_container() -> WorkflowExecutions {
    let events = vec![
        event(
            1,
            EventType::WorkflowExecutionStarted,
            Some(Attributes::WorkflowExecutionStartedEventAttributes(
                WorkflowExecutionStartedEventAttributes {
                    workflow_type: Some(WorkflowType {
                        name: "order-processing".to_owned(),
                    }),
                    task_queue: Some(TaskQueue {
                        name: "default".to_owned(),
                    }),
                    identity: "starter@client-1".to_owned(),
                    attempt: 1,
                    ..Default::default()
                },
            )),
        ),
        event(
            2,
            EventType::WorkflowTaskFailed,
            Some(Attributes::WorkflowTaskFailedEventAttributes(
                WorkflowTaskFailedEventAttributes {
                    scheduled_event_id: 1,
                    cause: WorkflowTaskFailedCause::NonDeterministicError as i32,
                    failure: Some(Failure {
                        message: "replay produced a different command sequence".to_owned(),
                        ..Default::default()
                    }),
                    identity: "worker@host-1".to_owned(),
                    ..Default::default()
                },
            )),
        ),
        event(
            3,
            EventType::WorkflowExecutionFailed,
            Some(Attributes::WorkflowExecutionFailedEventAttributes(
                WorkflowExecutionFailedEventAttributes {
                    failure: Some(Failure {
                        message: "workflow failed after non-deterministic error".to_owned(),
                        ..Default::default()
                    }),
                    retry_state: RetryState::RetryPolicyNotSet as i32,
                    workflow_task_completed_event_id: 2,
                    ..Default::default()
                },
            )),
        ),
    ];
    WorkflowExecutions {
        items: vec![WorkflowExecution {
            history: Some(History { events }),
        }],
    }
}

#[test]
fn converts_an_export_file_into_history_json() {
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, "history.proto", non_deterministic_failure_container());

    let json = exhume::history_json(&path).unwrap();

    assert!(json.contains("\"WorkflowExecutionStarted\""));
    assert!(json.contains("\"WorkflowTaskFailed\""));
    assert!(json.contains("\"WorkflowExecutionFailed\""));

    let document: serde_json::Value = serde_json::from_str(&json).unwrap();
    let failed = &document["events"][1]["workflowTaskFailedEventAttributes"];
    assert_eq!(
        failed["cause"],
        "WORKFLOW_TASK_FAILED_CAUSE_NON_DETERMINISTIC_ERROR"
    );
    assert_eq!(
        failed["failure"]["message"],
        "replay produced a different command sequence"
    );
}

#[test]
fn renders_identical_text_for_identical_exports() {
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, "history.proto", non_deterministic_failure_container());

    let first = exhume::history_json(&path).unwrap();
    let second = exhume::history_json(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn preserves_event_count_and_order() {
    let kinds = [
        EventType::WorkflowExecutionStarted,
        EventType::WorkflowTaskScheduled,
        EventType::WorkflowTaskStarted,
        EventType::WorkflowTaskCompleted,
        EventType::WorkflowExecutionCompleted,
    ];
    let events = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| event(i as i64 + 1, *kind, None))
        .collect();
    let container = WorkflowExecutions {
        items: vec![WorkflowExecution {
            history: Some(History { events }),
        }],
    };
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, "history.proto", container);

    let json = exhume::history_json(&path).unwrap();

    let document: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rendered = document["events"].as_array().unwrap();
    assert_eq!(rendered.len(), kinds.len());
    for (i, rendered_event) in rendered.iter().enumerate() {
        assert_eq!(rendered_event["eventId"], (i + 1).to_string());
    }
    assert_eq!(rendered[0]["eventType"], "WorkflowExecutionStarted");
    assert_eq!(rendered[4]["eventType"], "WorkflowExecutionCompleted");
}

#[test]
fn reports_a_missing_file_distinctly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-export.proto");

    let result = exhume::history_json(&path);

    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}

#[test]
fn reports_an_unreadable_source_distinctly() {
    let dir = TempDir::new().unwrap();

    // The directory itself exists but cannot be read as a file.
    let result = exhume::history_json(dir.path());

    assert!(matches!(result, Err(Error::SourceRead { .. })));
}

#[test]
fn reports_non_conforming_bytes_distinctly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.proto");
    // Field 1, length-delimited, promising five bytes where only one follows.
    fs::write(&path, [0x0a, 0x05, 0x01]).unwrap();

    let result = exhume::history_json(&path);

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn rejects_exports_holding_zero_or_many_histories() {
    let dir = TempDir::new().unwrap();
    let empty = write_container(&dir, "empty.proto", WorkflowExecutions::default());
    let record = WorkflowExecution {
        history: Some(History {
            events: vec![event(1, EventType::WorkflowExecutionStarted, None)],
        }),
    };
    let double = write_container(
        &dir,
        "double.proto",
        WorkflowExecutions {
            items: vec![record.clone(), record],
        },
    );

    assert!(matches!(
        exhume::history_json(&empty),
        Err(Error::EmptyExport)
    ));
    assert!(matches!(
        exhume::history_json(&double),
        Err(Error::MultipleHistories(2))
    ));
}
