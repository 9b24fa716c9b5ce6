//! The decode and validation pipeline for workflow export containers.
//!
//! A container is decoded fresh per call from a byte buffer, validated
//! against the one-history-per-export policy, and rendered to JSON text.
//! Nothing is cached or shared between calls, so concurrent invocations
//! are independent.
use std::path::Path;

use exhume_proto::export::{WorkflowExecution, WorkflowExecutions};
use exhume_proto::history::History;
use exhume_serde::serde::json::ProtoJson;
use exhume_serde::serde::prost::Prost;
use exhume_serde::Deserializer;

use crate::{source, Error};

/// Decodes a serialized export container from an in-memory buffer.
///
/// # Arguments
///
/// * `bytes` - The complete serialized container.
///
/// # Returns
///
/// A `Result` containing the decoded container, or the decode error for
/// bytes that do not conform to the export schema.
pub fn decode(bytes: Vec<u8>) -> Result<WorkflowExecutions, prost::DecodeError> {
    Prost::<WorkflowExecutions>::new().deserialize(bytes)
}

/// Loads and decodes an export container from a file.
///
/// The file is read fully into memory, then decoded. A missing file, an
/// unreadable file and non-conforming bytes are reported as three distinct
/// error kinds, each carrying the path.
///
/// # Arguments
///
/// * `path` - The path of the serialized export file.
///
/// # Returns
///
/// A `Result` containing the decoded container, or an [`Error`].
pub fn load_container(path: impl AsRef<Path>) -> Result<WorkflowExecutions, Error> {
    let path = path.as_ref();
    let bytes = source::read_source(path)?;
    decode(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Enforces the one-history-per-export policy on a decoded container.
///
/// The container format holds any number of execution records; this tool
/// processes exactly one per invocation. Zero records and more than one
/// record are input errors, reported distinctly.
///
/// # Arguments
///
/// * `container` - The decoded export container.
///
/// # Returns
///
/// A `Result` containing the sole execution record, or an [`Error`].
pub fn single_execution(container: WorkflowExecutions) -> Result<WorkflowExecution, Error> {
    let mut items = container.items;
    match items.len() {
        0 => Err(Error::EmptyExport),
        1 => Ok(items.remove(0)),
        n => Err(Error::MultipleHistories(n)),
    }
}

/// Renders one decoded event history as canonical JSON text.
///
/// See [`ProtoJson`] for the formatting rules. Rendering is infallible and
/// deterministic: identical histories produce byte-identical text.
pub fn render_history(history: &History) -> String {
    ProtoJson::render(history)
}

/// Converts a serialized export file into the JSON text of its single
/// workflow history.
///
/// This is the whole pipeline: load, decode, enforce the single-history
/// policy, render. An execution record with no history reports
/// [`Error::EmptyExport`], since there is no workflow history to show.
///
/// # Arguments
///
/// * `path` - The path of the serialized export file.
///
/// # Returns
///
/// A `Result` containing the JSON text document, or an [`Error`].
pub fn history_json(path: impl AsRef<Path>) -> Result<String, Error> {
    let execution = single_execution(load_container(path)?)?;
    let history = execution.history.ok_or(Error::EmptyExport)?;
    Ok(render_history(&history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhume_proto::enums::EventType;
    use exhume_proto::history::HistoryEvent;
    use prost::Message;

    fn container_with(items: Vec<WorkflowExecution>) -> WorkflowExecutions {
        WorkflowExecutions { items }
    }

    fn execution_with_events(events: Vec<HistoryEvent>) -> WorkflowExecution {
        WorkflowExecution {
            history: Some(History { events }),
        }
    }

    fn event(event_id: i64, event_type: EventType) -> HistoryEvent {
        HistoryEvent {
            event_id,
            event_type: event_type as i32,
            ..Default::default()
        }
    }

    #[test]
    fn it_decodes_an_encoded_container() {
        let container = container_with(vec![execution_with_events(vec![event(
            1,
            EventType::WorkflowExecutionStarted,
        )])]);

        let decoded = decode(container.encode_to_vec()).unwrap();

        assert_eq!(container, decoded);
    }

    #[test]
    fn it_fails_to_decode_non_conforming_bytes() {
        // Field 1, length-delimited, promising five bytes where only one follows.
        let result = decode(vec![0x0a, 0x05, 0x01]);

        assert!(result.is_err());
    }

    #[test]
    fn it_selects_the_sole_execution() {
        let execution = execution_with_events(vec![event(1, EventType::WorkflowExecutionStarted)]);

        let selected = single_execution(container_with(vec![execution.clone()])).unwrap();

        assert_eq!(execution, selected);
    }

    #[test]
    fn it_rejects_an_empty_container() {
        let result = single_execution(container_with(vec![]));

        assert!(matches!(result, Err(Error::EmptyExport)));
    }

    #[test]
    fn it_rejects_a_container_with_multiple_executions() {
        let executions = vec![
            execution_with_events(vec![event(1, EventType::WorkflowExecutionStarted)]),
            execution_with_events(vec![event(1, EventType::WorkflowExecutionStarted)]),
        ];

        let result = single_execution(container_with(executions));

        assert!(matches!(result, Err(Error::MultipleHistories(2))));
    }

    #[test]
    fn it_reports_a_record_without_history_as_empty() {
        let container = container_with(vec![WorkflowExecution { history: None }]);
        let bytes = container.encode_to_vec();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), bytes).unwrap();

        let result = history_json(file.path());

        assert!(matches!(result, Err(Error::EmptyExport)));
    }
}
