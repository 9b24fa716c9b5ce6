//! The event history of one workflow execution.

/// The complete, ordered event history of one workflow execution.
///
/// Events appear in occurrence order and the list is append-only; a decoded
/// history is never mutated.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct History {
    #[prost(message, repeated, tag = "1")]
    pub events: ::prost::alloc::vec::Vec<HistoryEvent>,
}

/// One state-transition event recorded for a workflow execution.
///
/// The `event_type` discriminator names the kind of transition; the
/// matching `attributes` variant carries the kind-specific payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoryEvent {
    /// Monotonically increasing id of the event within its history, starting at 1.
    #[prost(int64, tag = "1")]
    pub event_id: i64,
    #[prost(message, optional, tag = "2")]
    pub event_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(enumeration = "super::enums::EventType", tag = "3")]
    pub event_type: i32,
    #[prost(int64, tag = "4")]
    pub version: i64,
    #[prost(int64, tag = "5")]
    pub task_id: i64,
    #[prost(
        oneof = "history_event::Attributes",
        tags = "6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 26, 27, 28, 29"
    )]
    pub attributes: ::core::option::Option<history_event::Attributes>,
}

/// Nested message and enum types in `HistoryEvent`.
pub mod history_event {
    /// The event-type-specific payload.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Attributes {
        #[prost(message, tag = "6")]
        WorkflowExecutionStartedEventAttributes(super::WorkflowExecutionStartedEventAttributes),
        #[prost(message, tag = "7")]
        WorkflowExecutionCompletedEventAttributes(super::WorkflowExecutionCompletedEventAttributes),
        #[prost(message, tag = "8")]
        WorkflowExecutionFailedEventAttributes(super::WorkflowExecutionFailedEventAttributes),
        #[prost(message, tag = "9")]
        WorkflowExecutionTimedOutEventAttributes(super::WorkflowExecutionTimedOutEventAttributes),
        #[prost(message, tag = "10")]
        WorkflowTaskScheduledEventAttributes(super::WorkflowTaskScheduledEventAttributes),
        #[prost(message, tag = "11")]
        WorkflowTaskStartedEventAttributes(super::WorkflowTaskStartedEventAttributes),
        #[prost(message, tag = "12")]
        WorkflowTaskCompletedEventAttributes(super::WorkflowTaskCompletedEventAttributes),
        #[prost(message, tag = "13")]
        WorkflowTaskTimedOutEventAttributes(super::WorkflowTaskTimedOutEventAttributes),
        #[prost(message, tag = "14")]
        WorkflowTaskFailedEventAttributes(super::WorkflowTaskFailedEventAttributes),
        #[prost(message, tag = "15")]
        ActivityTaskScheduledEventAttributes(super::ActivityTaskScheduledEventAttributes),
        #[prost(message, tag = "16")]
        ActivityTaskStartedEventAttributes(super::ActivityTaskStartedEventAttributes),
        #[prost(message, tag = "17")]
        ActivityTaskCompletedEventAttributes(super::ActivityTaskCompletedEventAttributes),
        #[prost(message, tag = "18")]
        ActivityTaskFailedEventAttributes(super::ActivityTaskFailedEventAttributes),
        #[prost(message, tag = "19")]
        ActivityTaskTimedOutEventAttributes(super::ActivityTaskTimedOutEventAttributes),
        #[prost(message, tag = "20")]
        TimerStartedEventAttributes(super::TimerStartedEventAttributes),
        #[prost(message, tag = "21")]
        TimerFiredEventAttributes(super::TimerFiredEventAttributes),
        #[prost(message, tag = "22")]
        ActivityTaskCancelRequestedEventAttributes(
            super::ActivityTaskCancelRequestedEventAttributes,
        ),
        #[prost(message, tag = "23")]
        ActivityTaskCanceledEventAttributes(super::ActivityTaskCanceledEventAttributes),
        #[prost(message, tag = "24")]
        TimerCanceledEventAttributes(super::TimerCanceledEventAttributes),
        #[prost(message, tag = "26")]
        WorkflowExecutionSignaledEventAttributes(super::WorkflowExecutionSignaledEventAttributes),
        #[prost(message, tag = "27")]
        WorkflowExecutionTerminatedEventAttributes(
            super::WorkflowExecutionTerminatedEventAttributes,
        ),
        #[prost(message, tag = "28")]
        WorkflowExecutionCancelRequestedEventAttributes(
            super::WorkflowExecutionCancelRequestedEventAttributes,
        ),
        #[prost(message, tag = "29")]
        WorkflowExecutionCanceledEventAttributes(super::WorkflowExecutionCanceledEventAttributes),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionStartedEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub workflow_type: ::core::option::Option<super::common::WorkflowType>,
    #[prost(message, optional, tag = "4")]
    pub task_queue: ::core::option::Option<super::common::TaskQueue>,
    #[prost(message, optional, tag = "5")]
    pub input: ::core::option::Option<super::common::Payloads>,
    #[prost(message, optional, tag = "6")]
    pub workflow_execution_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "7")]
    pub workflow_run_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "8")]
    pub workflow_task_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, tag = "14")]
    pub identity: ::prost::alloc::string::String,
    /// Run id of the first run in the continue-as-new or retry chain.
    #[prost(string, tag = "15")]
    pub first_execution_run_id: ::prost::alloc::string::String,
    /// Attempt number, starting at 1 and incremented on each retry of the whole execution.
    #[prost(int32, tag = "17")]
    pub attempt: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionCompletedEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub result: ::core::option::Option<super::common::Payloads>,
    #[prost(int64, tag = "2")]
    pub workflow_task_completed_event_id: i64,
    #[prost(string, tag = "3")]
    pub new_execution_run_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionFailedEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub failure: ::core::option::Option<super::failure::Failure>,
    #[prost(enumeration = "super::enums::RetryState", tag = "2")]
    pub retry_state: i32,
    #[prost(int64, tag = "3")]
    pub workflow_task_completed_event_id: i64,
    #[prost(string, tag = "4")]
    pub new_execution_run_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionTimedOutEventAttributes {
    #[prost(enumeration = "super::enums::RetryState", tag = "1")]
    pub retry_state: i32,
    #[prost(string, tag = "2")]
    pub new_execution_run_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowTaskScheduledEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub task_queue: ::core::option::Option<super::common::TaskQueue>,
    #[prost(message, optional, tag = "2")]
    pub start_to_close_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(int32, tag = "3")]
    pub attempt: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowTaskStartedEventAttributes {
    /// Id of the `WorkflowTaskScheduled` event this task was scheduled by.
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(string, tag = "2")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowTaskCompletedEventAttributes {
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "2")]
    pub started_event_id: i64,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub binary_checksum: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowTaskTimedOutEventAttributes {
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "2")]
    pub started_event_id: i64,
    #[prost(enumeration = "super::enums::TimeoutType", tag = "3")]
    pub timeout_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowTaskFailedEventAttributes {
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "2")]
    pub started_event_id: i64,
    #[prost(enumeration = "super::enums::WorkflowTaskFailedCause", tag = "3")]
    pub cause: i32,
    #[prost(message, optional, tag = "4")]
    pub failure: ::core::option::Option<super::failure::Failure>,
    #[prost(string, tag = "5")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub binary_checksum: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskScheduledEventAttributes {
    #[prost(string, tag = "1")]
    pub activity_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub activity_type: ::core::option::Option<super::common::ActivityType>,
    #[prost(message, optional, tag = "4")]
    pub task_queue: ::core::option::Option<super::common::TaskQueue>,
    #[prost(message, optional, tag = "6")]
    pub input: ::core::option::Option<super::common::Payloads>,
    #[prost(message, optional, tag = "7")]
    pub schedule_to_close_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "9")]
    pub start_to_close_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "10")]
    pub heartbeat_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(int64, tag = "11")]
    pub workflow_task_completed_event_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskStartedEventAttributes {
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(string, tag = "2")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub request_id: ::prost::alloc::string::String,
    /// Attempt number, starting at 1 and incremented on each activity retry.
    #[prost(int32, tag = "4")]
    pub attempt: i32,
    /// The failure of the previous attempt, if this is a retry.
    #[prost(message, optional, tag = "5")]
    pub last_failure: ::core::option::Option<super::failure::Failure>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskCompletedEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub result: ::core::option::Option<super::common::Payloads>,
    #[prost(int64, tag = "2")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "3")]
    pub started_event_id: i64,
    #[prost(string, tag = "4")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskFailedEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub failure: ::core::option::Option<super::failure::Failure>,
    #[prost(int64, tag = "2")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "3")]
    pub started_event_id: i64,
    #[prost(string, tag = "4")]
    pub identity: ::prost::alloc::string::String,
    #[prost(enumeration = "super::enums::RetryState", tag = "5")]
    pub retry_state: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskTimedOutEventAttributes {
    /// The timeout that fired, wrapped in a failure carrying any last
    /// heartbeat details.
    #[prost(message, optional, tag = "1")]
    pub failure: ::core::option::Option<super::failure::Failure>,
    #[prost(int64, tag = "2")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "3")]
    pub started_event_id: i64,
    #[prost(enumeration = "super::enums::RetryState", tag = "4")]
    pub retry_state: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimerStartedEventAttributes {
    /// The workflow-scoped timer id, distinct from the event id.
    #[prost(string, tag = "1")]
    pub timer_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub start_to_fire_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(int64, tag = "3")]
    pub workflow_task_completed_event_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimerFiredEventAttributes {
    #[prost(string, tag = "1")]
    pub timer_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub started_event_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskCancelRequestedEventAttributes {
    #[prost(int64, tag = "1")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "2")]
    pub workflow_task_completed_event_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityTaskCanceledEventAttributes {
    #[prost(message, optional, tag = "1")]
    pub details: ::core::option::Option<super::common::Payloads>,
    #[prost(int64, tag = "2")]
    pub latest_cancel_requested_event_id: i64,
    #[prost(int64, tag = "3")]
    pub scheduled_event_id: i64,
    #[prost(int64, tag = "4")]
    pub started_event_id: i64,
    #[prost(string, tag = "5")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimerCanceledEventAttributes {
    #[prost(string, tag = "1")]
    pub timer_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub started_event_id: i64,
    #[prost(int64, tag = "3")]
    pub workflow_task_completed_event_id: i64,
    #[prost(string, tag = "4")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionSignaledEventAttributes {
    #[prost(string, tag = "1")]
    pub signal_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub input: ::core::option::Option<super::common::Payloads>,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionTerminatedEventAttributes {
    #[prost(string, tag = "1")]
    pub reason: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub details: ::core::option::Option<super::common::Payloads>,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionCancelRequestedEventAttributes {
    #[prost(string, tag = "1")]
    pub cause: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutionCanceledEventAttributes {
    #[prost(int64, tag = "1")]
    pub workflow_task_completed_event_id: i64,
    #[prost(message, optional, tag = "2")]
    pub details: ::core::option::Option<super::common::Payloads>,
}

