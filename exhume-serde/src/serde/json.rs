//! Canonical JSON rendering of decoded event histories.
//!
//! The mapping follows the export format's own JSON convention, so rendered
//! histories match what its tooling produces and round-trip into the same
//! structure:
//!
//! * field names are lowerCamelCase, in schema declaration order;
//! * 64-bit integers render as decimal strings so consumers cannot lose
//!   precision above 2^53;
//! * enum values render by canonical name — the event type in its short
//!   PascalCase form (`"WorkflowExecutionStarted"`), every other enum as its
//!   full SCREAMING_SNAKE name; values unknown to the compiled schema render
//!   as their raw integer;
//! * timestamps render as RFC 3339 UTC strings, durations as decimal seconds
//!   with an `s` suffix, bytes as standard base64;
//! * fields at their proto3 default are omitted.
//!
//! Rendering is a pure function of the decoded history: identical input
//! yields byte-identical output.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, SecondsFormat};
use exhume_proto::common;
use exhume_proto::enums::{EventType, RetryState, TimeoutType, WorkflowTaskFailedCause};
use exhume_proto::failure::{self, failure::FailureInfo};
use exhume_proto::history::{self, history_event::Attributes, History, HistoryEvent};
use serde_json::{Map, Value};

use crate::serde::Serializer;

/// A canonical JSON rendering module for event histories.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoJson;

impl ProtoJson {
    /// Renders the given history as pretty-printed canonical JSON text.
    ///
    /// # Arguments
    ///
    /// * `history` - The decoded event history to render.
    ///
    /// # Returns
    ///
    /// A JSON text document containing every populated field of every event.
    pub fn render(history: &History) -> String {
        serde_json::to_string_pretty(&history_value(history))
            .expect("json rendering should not fail")
    }
}

impl<'a> Serializer<&'a History> for ProtoJson {
    /// Serializes the given history to canonical JSON text as UTF-8 bytes.
    ///
    /// # Arguments
    ///
    /// * `value` - The decoded event history to render.
    ///
    /// # Returns
    ///
    /// Serialized bytes holding the JSON text document.
    fn serialize(&self, value: &'a History) -> Vec<u8> {
        ProtoJson::render(value).into_bytes()
    }
}

/// Collects the present fields of one message, in schema declaration order.
///
/// Every setter omits the field when the value is at its proto3 default.
#[derive(Default)]
struct Fields(Map<String, Value>);

impl Fields {
    fn string(mut self, name: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.0.insert(name.to_owned(), Value::from(value));
        }
        self
    }

    fn int32(mut self, name: &str, value: i32) -> Self {
        if value != 0 {
            self.0.insert(name.to_owned(), Value::from(value));
        }
        self
    }

    fn int64(mut self, name: &str, value: i64) -> Self {
        if value != 0 {
            self.0.insert(name.to_owned(), Value::from(value.to_string()));
        }
        self
    }

    fn boolean(mut self, name: &str, value: bool) -> Self {
        if value {
            self.0.insert(name.to_owned(), Value::Bool(true));
        }
        self
    }

    fn bytes(mut self, name: &str, value: &[u8]) -> Self {
        if !value.is_empty() {
            self.0.insert(name.to_owned(), Value::from(STANDARD.encode(value)));
        }
        self
    }

    fn message(mut self, name: &str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.0.insert(name.to_owned(), value);
        }
        self
    }

    fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn history_value(history: &History) -> Value {
    let events: Vec<Value> = history.events.iter().map(event_value).collect();
    let mut fields = Map::new();
    if !events.is_empty() {
        fields.insert("events".to_owned(), Value::Array(events));
    }
    Value::Object(fields)
}

fn event_value(event: &HistoryEvent) -> Value {
    let mut fields = Fields::default()
        .int64("eventId", event.event_id)
        .message("eventTime", event.event_time.as_ref().map(timestamp_value))
        .message("eventType", event_type_value(event.event_type))
        .int64("version", event.version)
        .int64("taskId", event.task_id);
    if let Some(attributes) = &event.attributes {
        let (name, value) = attributes_value(attributes);
        fields = fields.message(name, Some(value));
    }
    fields.into_value()
}

fn attributes_value(attributes: &Attributes) -> (&'static str, Value) {
    match attributes {
        Attributes::WorkflowExecutionStartedEventAttributes(attributes) => (
            "workflowExecutionStartedEventAttributes",
            workflow_execution_started_value(attributes),
        ),
        Attributes::WorkflowExecutionCompletedEventAttributes(attributes) => (
            "workflowExecutionCompletedEventAttributes",
            workflow_execution_completed_value(attributes),
        ),
        Attributes::WorkflowExecutionFailedEventAttributes(attributes) => (
            "workflowExecutionFailedEventAttributes",
            workflow_execution_failed_value(attributes),
        ),
        Attributes::WorkflowExecutionTimedOutEventAttributes(attributes) => (
            "workflowExecutionTimedOutEventAttributes",
            workflow_execution_timed_out_value(attributes),
        ),
        Attributes::WorkflowTaskScheduledEventAttributes(attributes) => (
            "workflowTaskScheduledEventAttributes",
            workflow_task_scheduled_value(attributes),
        ),
        Attributes::WorkflowTaskStartedEventAttributes(attributes) => (
            "workflowTaskStartedEventAttributes",
            workflow_task_started_value(attributes),
        ),
        Attributes::WorkflowTaskCompletedEventAttributes(attributes) => (
            "workflowTaskCompletedEventAttributes",
            workflow_task_completed_value(attributes),
        ),
        Attributes::WorkflowTaskTimedOutEventAttributes(attributes) => (
            "workflowTaskTimedOutEventAttributes",
            workflow_task_timed_out_value(attributes),
        ),
        Attributes::WorkflowTaskFailedEventAttributes(attributes) => (
            "workflowTaskFailedEventAttributes",
            workflow_task_failed_value(attributes),
        ),
        Attributes::ActivityTaskScheduledEventAttributes(attributes) => (
            "activityTaskScheduledEventAttributes",
            activity_task_scheduled_value(attributes),
        ),
        Attributes::ActivityTaskStartedEventAttributes(attributes) => (
            "activityTaskStartedEventAttributes",
            activity_task_started_value(attributes),
        ),
        Attributes::ActivityTaskCompletedEventAttributes(attributes) => (
            "activityTaskCompletedEventAttributes",
            activity_task_completed_value(attributes),
        ),
        Attributes::ActivityTaskFailedEventAttributes(attributes) => (
            "activityTaskFailedEventAttributes",
            activity_task_failed_value(attributes),
        ),
        Attributes::ActivityTaskTimedOutEventAttributes(attributes) => (
            "activityTaskTimedOutEventAttributes",
            activity_task_timed_out_value(attributes),
        ),
        Attributes::TimerStartedEventAttributes(attributes) => {
            ("timerStartedEventAttributes", timer_started_value(attributes))
        }
        Attributes::TimerFiredEventAttributes(attributes) => {
            ("timerFiredEventAttributes", timer_fired_value(attributes))
        }
        Attributes::ActivityTaskCancelRequestedEventAttributes(attributes) => (
            "activityTaskCancelRequestedEventAttributes",
            activity_task_cancel_requested_value(attributes),
        ),
        Attributes::ActivityTaskCanceledEventAttributes(attributes) => (
            "activityTaskCanceledEventAttributes",
            activity_task_canceled_value(attributes),
        ),
        Attributes::TimerCanceledEventAttributes(attributes) => {
            ("timerCanceledEventAttributes", timer_canceled_value(attributes))
        }
        Attributes::WorkflowExecutionSignaledEventAttributes(attributes) => (
            "workflowExecutionSignaledEventAttributes",
            workflow_execution_signaled_value(attributes),
        ),
        Attributes::WorkflowExecutionTerminatedEventAttributes(attributes) => (
            "workflowExecutionTerminatedEventAttributes",
            workflow_execution_terminated_value(attributes),
        ),
        Attributes::WorkflowExecutionCancelRequestedEventAttributes(attributes) => (
            "workflowExecutionCancelRequestedEventAttributes",
            workflow_execution_cancel_requested_value(attributes),
        ),
        Attributes::WorkflowExecutionCanceledEventAttributes(attributes) => (
            "workflowExecutionCanceledEventAttributes",
            workflow_execution_canceled_value(attributes),
        ),
    }
}

fn workflow_execution_started_value(
    attributes: &history::WorkflowExecutionStartedEventAttributes,
) -> Value {
    Fields::default()
        .message(
            "workflowType",
            attributes.workflow_type.as_ref().map(workflow_type_value),
        )
        .message("taskQueue", attributes.task_queue.as_ref().map(task_queue_value))
        .message("input", attributes.input.as_ref().map(payloads_value))
        .message(
            "workflowExecutionTimeout",
            attributes.workflow_execution_timeout.as_ref().map(duration_value),
        )
        .message(
            "workflowRunTimeout",
            attributes.workflow_run_timeout.as_ref().map(duration_value),
        )
        .message(
            "workflowTaskTimeout",
            attributes.workflow_task_timeout.as_ref().map(duration_value),
        )
        .string("identity", &attributes.identity)
        .string("firstExecutionRunId", &attributes.first_execution_run_id)
        .int32("attempt", attributes.attempt)
        .into_value()
}

fn workflow_execution_completed_value(
    attributes: &history::WorkflowExecutionCompletedEventAttributes,
) -> Value {
    Fields::default()
        .message("result", attributes.result.as_ref().map(payloads_value))
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .string("newExecutionRunId", &attributes.new_execution_run_id)
        .into_value()
}

fn workflow_execution_failed_value(
    attributes: &history::WorkflowExecutionFailedEventAttributes,
) -> Value {
    Fields::default()
        .message("failure", attributes.failure.as_ref().map(failure_value))
        .message("retryState", retry_state_value(attributes.retry_state))
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .string("newExecutionRunId", &attributes.new_execution_run_id)
        .into_value()
}

fn workflow_execution_timed_out_value(
    attributes: &history::WorkflowExecutionTimedOutEventAttributes,
) -> Value {
    Fields::default()
        .message("retryState", retry_state_value(attributes.retry_state))
        .string("newExecutionRunId", &attributes.new_execution_run_id)
        .into_value()
}

fn workflow_task_scheduled_value(
    attributes: &history::WorkflowTaskScheduledEventAttributes,
) -> Value {
    Fields::default()
        .message("taskQueue", attributes.task_queue.as_ref().map(task_queue_value))
        .message(
            "startToCloseTimeout",
            attributes.start_to_close_timeout.as_ref().map(duration_value),
        )
        .int32("attempt", attributes.attempt)
        .into_value()
}

fn workflow_task_started_value(attributes: &history::WorkflowTaskStartedEventAttributes) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .string("identity", &attributes.identity)
        .string("requestId", &attributes.request_id)
        .into_value()
}

fn workflow_task_completed_value(
    attributes: &history::WorkflowTaskCompletedEventAttributes,
) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .string("identity", &attributes.identity)
        .string("binaryChecksum", &attributes.binary_checksum)
        .into_value()
}

fn workflow_task_timed_out_value(
    attributes: &history::WorkflowTaskTimedOutEventAttributes,
) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .message("timeoutType", timeout_type_value(attributes.timeout_type))
        .into_value()
}

fn workflow_task_failed_value(attributes: &history::WorkflowTaskFailedEventAttributes) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .message("cause", workflow_task_failed_cause_value(attributes.cause))
        .message("failure", attributes.failure.as_ref().map(failure_value))
        .string("identity", &attributes.identity)
        .string("binaryChecksum", &attributes.binary_checksum)
        .into_value()
}

fn activity_task_scheduled_value(
    attributes: &history::ActivityTaskScheduledEventAttributes,
) -> Value {
    Fields::default()
        .string("activityId", &attributes.activity_id)
        .message(
            "activityType",
            attributes.activity_type.as_ref().map(activity_type_value),
        )
        .message("taskQueue", attributes.task_queue.as_ref().map(task_queue_value))
        .message("input", attributes.input.as_ref().map(payloads_value))
        .message(
            "scheduleToCloseTimeout",
            attributes.schedule_to_close_timeout.as_ref().map(duration_value),
        )
        .message(
            "startToCloseTimeout",
            attributes.start_to_close_timeout.as_ref().map(duration_value),
        )
        .message(
            "heartbeatTimeout",
            attributes.heartbeat_timeout.as_ref().map(duration_value),
        )
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .into_value()
}

fn activity_task_started_value(attributes: &history::ActivityTaskStartedEventAttributes) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .string("identity", &attributes.identity)
        .string("requestId", &attributes.request_id)
        .int32("attempt", attributes.attempt)
        .message("lastFailure", attributes.last_failure.as_ref().map(failure_value))
        .into_value()
}

fn activity_task_completed_value(
    attributes: &history::ActivityTaskCompletedEventAttributes,
) -> Value {
    Fields::default()
        .message("result", attributes.result.as_ref().map(payloads_value))
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .string("identity", &attributes.identity)
        .into_value()
}

fn activity_task_failed_value(attributes: &history::ActivityTaskFailedEventAttributes) -> Value {
    Fields::default()
        .message("failure", attributes.failure.as_ref().map(failure_value))
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .string("identity", &attributes.identity)
        .message("retryState", retry_state_value(attributes.retry_state))
        .into_value()
}

fn activity_task_timed_out_value(
    attributes: &history::ActivityTaskTimedOutEventAttributes,
) -> Value {
    Fields::default()
        .message("failure", attributes.failure.as_ref().map(failure_value))
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .message("retryState", retry_state_value(attributes.retry_state))
        .into_value()
}

fn timer_started_value(attributes: &history::TimerStartedEventAttributes) -> Value {
    Fields::default()
        .string("timerId", &attributes.timer_id)
        .message(
            "startToFireTimeout",
            attributes.start_to_fire_timeout.as_ref().map(duration_value),
        )
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .into_value()
}

fn timer_fired_value(attributes: &history::TimerFiredEventAttributes) -> Value {
    Fields::default()
        .string("timerId", &attributes.timer_id)
        .int64("startedEventId", attributes.started_event_id)
        .into_value()
}

fn activity_task_cancel_requested_value(
    attributes: &history::ActivityTaskCancelRequestedEventAttributes,
) -> Value {
    Fields::default()
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .into_value()
}

fn activity_task_canceled_value(
    attributes: &history::ActivityTaskCanceledEventAttributes,
) -> Value {
    Fields::default()
        .message("details", attributes.details.as_ref().map(payloads_value))
        .int64(
            "latestCancelRequestedEventId",
            attributes.latest_cancel_requested_event_id,
        )
        .int64("scheduledEventId", attributes.scheduled_event_id)
        .int64("startedEventId", attributes.started_event_id)
        .string("identity", &attributes.identity)
        .into_value()
}

fn timer_canceled_value(attributes: &history::TimerCanceledEventAttributes) -> Value {
    Fields::default()
        .string("timerId", &attributes.timer_id)
        .int64("startedEventId", attributes.started_event_id)
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .string("identity", &attributes.identity)
        .into_value()
}

fn workflow_execution_signaled_value(
    attributes: &history::WorkflowExecutionSignaledEventAttributes,
) -> Value {
    Fields::default()
        .string("signalName", &attributes.signal_name)
        .message("input", attributes.input.as_ref().map(payloads_value))
        .string("identity", &attributes.identity)
        .into_value()
}

fn workflow_execution_terminated_value(
    attributes: &history::WorkflowExecutionTerminatedEventAttributes,
) -> Value {
    Fields::default()
        .string("reason", &attributes.reason)
        .message("details", attributes.details.as_ref().map(payloads_value))
        .string("identity", &attributes.identity)
        .into_value()
}

fn workflow_execution_cancel_requested_value(
    attributes: &history::WorkflowExecutionCancelRequestedEventAttributes,
) -> Value {
    Fields::default()
        .string("cause", &attributes.cause)
        .string("identity", &attributes.identity)
        .into_value()
}

fn workflow_execution_canceled_value(
    attributes: &history::WorkflowExecutionCanceledEventAttributes,
) -> Value {
    Fields::default()
        .int64(
            "workflowTaskCompletedEventId",
            attributes.workflow_task_completed_event_id,
        )
        .message("details", attributes.details.as_ref().map(payloads_value))
        .into_value()
}

fn failure_value(failure: &failure::Failure) -> Value {
    let mut fields = Fields::default()
        .string("message", &failure.message)
        .string("source", &failure.source)
        .string("stackTrace", &failure.stack_trace)
        .message("cause", failure.cause.as_deref().map(failure_value));
    if let Some(info) = &failure.failure_info {
        let (name, value) = failure_info_value(info);
        fields = fields.message(name, Some(value));
    }
    fields.into_value()
}

fn failure_info_value(info: &FailureInfo) -> (&'static str, Value) {
    match info {
        FailureInfo::ApplicationFailureInfo(info) => (
            "applicationFailureInfo",
            Fields::default()
                .string("type", &info.r#type)
                .boolean("nonRetryable", info.non_retryable)
                .message("details", info.details.as_ref().map(payloads_value))
                .into_value(),
        ),
        FailureInfo::TimeoutFailureInfo(info) => (
            "timeoutFailureInfo",
            Fields::default()
                .message("timeoutType", timeout_type_value(info.timeout_type))
                .message(
                    "lastHeartbeatDetails",
                    info.last_heartbeat_details.as_ref().map(payloads_value),
                )
                .into_value(),
        ),
        FailureInfo::CanceledFailureInfo(info) => (
            "canceledFailureInfo",
            Fields::default()
                .message("details", info.details.as_ref().map(payloads_value))
                .into_value(),
        ),
        FailureInfo::TerminatedFailureInfo(_) => {
            ("terminatedFailureInfo", Value::Object(Map::new()))
        }
        FailureInfo::ServerFailureInfo(info) => (
            "serverFailureInfo",
            Fields::default()
                .boolean("nonRetryable", info.non_retryable)
                .into_value(),
        ),
    }
}

fn workflow_type_value(workflow_type: &common::WorkflowType) -> Value {
    Fields::default().string("name", &workflow_type.name).into_value()
}

fn activity_type_value(activity_type: &common::ActivityType) -> Value {
    Fields::default().string("name", &activity_type.name).into_value()
}

fn task_queue_value(task_queue: &common::TaskQueue) -> Value {
    Fields::default().string("name", &task_queue.name).into_value()
}

fn payloads_value(payloads: &common::Payloads) -> Value {
    let items: Vec<Value> = payloads.payloads.iter().map(payload_value).collect();
    let mut fields = Map::new();
    if !items.is_empty() {
        fields.insert("payloads".to_owned(), Value::Array(items));
    }
    Value::Object(fields)
}

fn payload_value(payload: &common::Payload) -> Value {
    let mut metadata = Map::new();
    for (key, value) in &payload.metadata {
        metadata.insert(key.clone(), Value::from(STANDARD.encode(value)));
    }
    Fields::default()
        .message("metadata", (!metadata.is_empty()).then_some(Value::Object(metadata)))
        .bytes("data", &payload.data)
        .into_value()
}

fn timestamp_value(time: &prost_types::Timestamp) -> Value {
    let time = DateTime::from_timestamp(time.seconds, time.nanos as u32)
        .expect("event timestamp should be within the RFC 3339 range");
    Value::from(time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

fn duration_value(duration: &prost_types::Duration) -> Value {
    let sign = if duration.seconds < 0 || duration.nanos < 0 { "-" } else { "" };
    let seconds = duration.seconds.unsigned_abs();
    let nanos = duration.nanos.unsigned_abs();
    let text = if nanos == 0 {
        format!("{sign}{seconds}s")
    } else if nanos % 1_000_000 == 0 {
        format!("{sign}{seconds}.{:03}s", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!("{sign}{seconds}.{:06}s", nanos / 1_000)
    } else {
        format!("{sign}{seconds}.{nanos:09}s")
    };
    Value::from(text)
}

fn event_type_value(raw: i32) -> Option<Value> {
    if raw == 0 {
        return None;
    }
    Some(match EventType::try_from(raw) {
        Ok(event_type) => Value::from(event_type_json_name(event_type)),
        Err(_) => Value::from(raw),
    })
}

/// The export format renders event types in short PascalCase form
/// ("WorkflowExecutionStarted"), not as the full SCREAMING name.
fn event_type_json_name(event_type: EventType) -> String {
    let name = event_type
        .as_str_name()
        .trim_start_matches("EVENT_TYPE_");
    let mut out = String::with_capacity(name.len());
    for word in name.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first);
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    out
}

fn workflow_task_failed_cause_value(raw: i32) -> Option<Value> {
    if raw == 0 {
        return None;
    }
    Some(match WorkflowTaskFailedCause::try_from(raw) {
        Ok(cause) => Value::from(cause.as_str_name()),
        Err(_) => Value::from(raw),
    })
}

fn timeout_type_value(raw: i32) -> Option<Value> {
    if raw == 0 {
        return None;
    }
    Some(match TimeoutType::try_from(raw) {
        Ok(timeout_type) => Value::from(timeout_type.as_str_name()),
        Err(_) => Value::from(raw),
    })
}

fn retry_state_value(raw: i32) -> Option<Value> {
    if raw == 0 {
        return None;
    }
    Some(match RetryState::try_from(raw) {
        Ok(retry_state) => Value::from(retry_state.as_str_name()),
        Err(_) => Value::from(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhume_proto::failure::{ApplicationFailureInfo, Failure};
    use exhume_proto::history::{
        TimerStartedEventAttributes, WorkflowExecutionStartedEventAttributes,
        WorkflowTaskFailedEventAttributes,
    };

    fn started_event() -> HistoryEvent {
        HistoryEvent {
            event_id: 1,
            event_time: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 21_000_000,
            }),
            event_type: EventType::WorkflowExecutionStarted as i32,
            task_id: 1_048_576,
            attributes: Some(Attributes::WorkflowExecutionStartedEventAttributes(
                WorkflowExecutionStartedEventAttributes {
                    workflow_type: Some(common::WorkflowType {
                        name: "order-processing".to_owned(),
                    }),
                    task_queue: Some(common::TaskQueue {
                        name: "default".to_owned(),
                    }),
                    attempt: 1,
                    ..Default::default()
                },
            )),
            ..Default::default()
        }
    }

    #[test]
    fn it_renders_event_types_in_pascal_case() {
        let history = History {
            events: vec![started_event()],
        };

        let rendered = ProtoJson::render(&history);

        assert!(rendered.contains("\"eventType\": \"WorkflowExecutionStarted\""));
        assert!(!rendered.contains("EVENT_TYPE_"));
    }

    #[test]
    fn it_renders_sixty_four_bit_integers_as_strings() {
        let history = History {
            events: vec![started_event()],
        };

        let rendered = ProtoJson::render(&history);

        assert!(rendered.contains("\"eventId\": \"1\""));
        assert!(rendered.contains("\"taskId\": \"1048576\""));
    }

    #[test]
    fn it_renders_timestamps_as_rfc_3339() {
        let history = History {
            events: vec![started_event()],
        };

        let rendered = ProtoJson::render(&history);

        assert!(rendered.contains("\"eventTime\": \"2023-11-14T22:13:20.021Z\""));
    }

    #[test]
    fn it_omits_fields_at_their_default_value() {
        let history = History {
            events: vec![HistoryEvent {
                event_id: 2,
                event_type: EventType::TimerStarted as i32,
                attributes: Some(Attributes::TimerStartedEventAttributes(
                    TimerStartedEventAttributes {
                        timer_id: "timer-1".to_owned(),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            }],
        };

        let rendered = ProtoJson::render(&history);

        // Unset version, task id, timeout and event id references are absent.
        assert!(!rendered.contains("version"));
        assert!(!rendered.contains("taskId"));
        assert!(!rendered.contains("startToFireTimeout"));
        assert!(!rendered.contains("workflowTaskCompletedEventId"));
        assert!(rendered.contains("\"timerId\": \"timer-1\""));
    }

    #[test]
    fn it_renders_failure_chains_with_cause_and_canonical_enum_names() {
        let history = History {
            events: vec![HistoryEvent {
                event_id: 14,
                event_type: EventType::WorkflowTaskFailed as i32,
                attributes: Some(Attributes::WorkflowTaskFailedEventAttributes(
                    WorkflowTaskFailedEventAttributes {
                        scheduled_event_id: 12,
                        started_event_id: 13,
                        cause: WorkflowTaskFailedCause::NonDeterministicError as i32,
                        failure: Some(Failure {
                            message: "unexpected command".to_owned(),
                            cause: Some(Box::new(Failure {
                                message: "history mismatch".to_owned(),
                                failure_info: Some(FailureInfo::ApplicationFailureInfo(
                                    ApplicationFailureInfo {
                                        r#type: "NonDeterminismError".to_owned(),
                                        non_retryable: true,
                                        details: None,
                                    },
                                )),
                                ..Default::default()
                            })),
                            ..Default::default()
                        }),
                        identity: "worker@host-1".to_owned(),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            }],
        };

        let rendered = ProtoJson::render(&history);

        assert!(
            rendered.contains("\"cause\": \"WORKFLOW_TASK_FAILED_CAUSE_NON_DETERMINISTIC_ERROR\"")
        );
        assert!(rendered.contains("\"message\": \"unexpected command\""));
        assert!(rendered.contains("\"message\": \"history mismatch\""));
        assert!(rendered.contains("\"type\": \"NonDeterminismError\""));
        assert!(rendered.contains("\"nonRetryable\": true"));
    }

    #[test]
    fn it_renders_payload_data_as_base64() {
        let history = History {
            events: vec![HistoryEvent {
                event_id: 1,
                event_type: EventType::WorkflowExecutionStarted as i32,
                attributes: Some(Attributes::WorkflowExecutionStartedEventAttributes(
                    WorkflowExecutionStartedEventAttributes {
                        input: Some(common::Payloads {
                            payloads: vec![common::Payload {
                                metadata: [("encoding".to_owned(), b"json/plain".to_vec())]
                                    .into_iter()
                                    .collect(),
                                data: b"{\"orderId\":42}".to_vec(),
                            }],
                        }),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            }],
        };

        let rendered = ProtoJson::render(&history);

        assert!(rendered.contains("\"encoding\": \"anNvbi9wbGFpbg==\""));
        assert!(rendered.contains("\"data\": \"eyJvcmRlcklkIjo0Mn0=\""));
    }

    #[test]
    fn it_renders_durations_as_decimal_seconds() {
        assert_eq!(
            duration_value(&prost_types::Duration {
                seconds: 10,
                nanos: 0
            }),
            Value::from("10s")
        );
        assert_eq!(
            duration_value(&prost_types::Duration {
                seconds: 1,
                nanos: 500_000_000
            }),
            Value::from("1.500s")
        );
        assert_eq!(
            duration_value(&prost_types::Duration {
                seconds: 0,
                nanos: 1_200
            }),
            Value::from("0.000001200s")
        );
    }

    #[test]
    fn it_serializes_utf8_json_bytes_through_the_serializer_trait() {
        let history = History {
            events: vec![started_event()],
        };

        let bytes = ProtoJson.serialize(&history);

        assert_eq!(String::from_utf8(bytes).unwrap(), ProtoJson::render(&history));
    }

    #[test]
    fn it_renders_the_same_history_to_identical_text() {
        let history = History {
            events: vec![started_event()],
        };

        assert_eq!(ProtoJson::render(&history), ProtoJson::render(&history));
    }
}
