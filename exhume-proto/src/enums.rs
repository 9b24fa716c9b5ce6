//! Enum values used by the export schema.

/// The kind of a history event.
///
/// Every event in a history carries exactly one of these values; the
/// matching `*EventAttributes` message on the event holds the kind-specific
/// payload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
)]
#[repr(i32)]
pub enum EventType {
    Unspecified = 0,
    WorkflowExecutionStarted = 1,
    WorkflowExecutionCompleted = 2,
    WorkflowExecutionFailed = 3,
    WorkflowExecutionTimedOut = 4,
    WorkflowTaskScheduled = 5,
    WorkflowTaskStarted = 6,
    WorkflowTaskCompleted = 7,
    WorkflowTaskTimedOut = 8,
    WorkflowTaskFailed = 9,
    ActivityTaskScheduled = 10,
    ActivityTaskStarted = 11,
    ActivityTaskCompleted = 12,
    ActivityTaskFailed = 13,
    ActivityTaskTimedOut = 14,
    TimerStarted = 15,
    TimerFired = 16,
    ActivityTaskCancelRequested = 17,
    ActivityTaskCanceled = 18,
    TimerCanceled = 19,
    MarkerRecorded = 20,
    WorkflowExecutionSignaled = 21,
    WorkflowExecutionTerminated = 22,
    WorkflowExecutionCancelRequested = 23,
    WorkflowExecutionCanceled = 24,
}

impl EventType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "EVENT_TYPE_UNSPECIFIED",
            Self::WorkflowExecutionStarted => "EVENT_TYPE_WORKFLOW_EXECUTION_STARTED",
            Self::WorkflowExecutionCompleted => "EVENT_TYPE_WORKFLOW_EXECUTION_COMPLETED",
            Self::WorkflowExecutionFailed => "EVENT_TYPE_WORKFLOW_EXECUTION_FAILED",
            Self::WorkflowExecutionTimedOut => "EVENT_TYPE_WORKFLOW_EXECUTION_TIMED_OUT",
            Self::WorkflowTaskScheduled => "EVENT_TYPE_WORKFLOW_TASK_SCHEDULED",
            Self::WorkflowTaskStarted => "EVENT_TYPE_WORKFLOW_TASK_STARTED",
            Self::WorkflowTaskCompleted => "EVENT_TYPE_WORKFLOW_TASK_COMPLETED",
            Self::WorkflowTaskTimedOut => "EVENT_TYPE_WORKFLOW_TASK_TIMED_OUT",
            Self::WorkflowTaskFailed => "EVENT_TYPE_WORKFLOW_TASK_FAILED",
            Self::ActivityTaskScheduled => "EVENT_TYPE_ACTIVITY_TASK_SCHEDULED",
            Self::ActivityTaskStarted => "EVENT_TYPE_ACTIVITY_TASK_STARTED",
            Self::ActivityTaskCompleted => "EVENT_TYPE_ACTIVITY_TASK_COMPLETED",
            Self::ActivityTaskFailed => "EVENT_TYPE_ACTIVITY_TASK_FAILED",
            Self::ActivityTaskTimedOut => "EVENT_TYPE_ACTIVITY_TASK_TIMED_OUT",
            Self::TimerStarted => "EVENT_TYPE_TIMER_STARTED",
            Self::TimerFired => "EVENT_TYPE_TIMER_FIRED",
            Self::ActivityTaskCancelRequested => "EVENT_TYPE_ACTIVITY_TASK_CANCEL_REQUESTED",
            Self::ActivityTaskCanceled => "EVENT_TYPE_ACTIVITY_TASK_CANCELED",
            Self::TimerCanceled => "EVENT_TYPE_TIMER_CANCELED",
            Self::MarkerRecorded => "EVENT_TYPE_MARKER_RECORDED",
            Self::WorkflowExecutionSignaled => "EVENT_TYPE_WORKFLOW_EXECUTION_SIGNALED",
            Self::WorkflowExecutionTerminated => "EVENT_TYPE_WORKFLOW_EXECUTION_TERMINATED",
            Self::WorkflowExecutionCancelRequested => {
                "EVENT_TYPE_WORKFLOW_EXECUTION_CANCEL_REQUESTED"
            }
            Self::WorkflowExecutionCanceled => "EVENT_TYPE_WORKFLOW_EXECUTION_CANCELED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "EVENT_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "EVENT_TYPE_WORKFLOW_EXECUTION_STARTED" => Some(Self::WorkflowExecutionStarted),
            "EVENT_TYPE_WORKFLOW_EXECUTION_COMPLETED" => Some(Self::WorkflowExecutionCompleted),
            "EVENT_TYPE_WORKFLOW_EXECUTION_FAILED" => Some(Self::WorkflowExecutionFailed),
            "EVENT_TYPE_WORKFLOW_EXECUTION_TIMED_OUT" => Some(Self::WorkflowExecutionTimedOut),
            "EVENT_TYPE_WORKFLOW_TASK_SCHEDULED" => Some(Self::WorkflowTaskScheduled),
            "EVENT_TYPE_WORKFLOW_TASK_STARTED" => Some(Self::WorkflowTaskStarted),
            "EVENT_TYPE_WORKFLOW_TASK_COMPLETED" => Some(Self::WorkflowTaskCompleted),
            "EVENT_TYPE_WORKFLOW_TASK_TIMED_OUT" => Some(Self::WorkflowTaskTimedOut),
            "EVENT_TYPE_WORKFLOW_TASK_FAILED" => Some(Self::WorkflowTaskFailed),
            "EVENT_TYPE_ACTIVITY_TASK_SCHEDULED" => Some(Self::ActivityTaskScheduled),
            "EVENT_TYPE_ACTIVITY_TASK_STARTED" => Some(Self::ActivityTaskStarted),
            "EVENT_TYPE_ACTIVITY_TASK_COMPLETED" => Some(Self::ActivityTaskCompleted),
            "EVENT_TYPE_ACTIVITY_TASK_FAILED" => Some(Self::ActivityTaskFailed),
            "EVENT_TYPE_ACTIVITY_TASK_TIMED_OUT" => Some(Self::ActivityTaskTimedOut),
            "EVENT_TYPE_TIMER_STARTED" => Some(Self::TimerStarted),
            "EVENT_TYPE_TIMER_FIRED" => Some(Self::TimerFired),
            "EVENT_TYPE_ACTIVITY_TASK_CANCEL_REQUESTED" => Some(Self::ActivityTaskCancelRequested),
            "EVENT_TYPE_ACTIVITY_TASK_CANCELED" => Some(Self::ActivityTaskCanceled),
            "EVENT_TYPE_TIMER_CANCELED" => Some(Self::TimerCanceled),
            "EVENT_TYPE_MARKER_RECORDED" => Some(Self::MarkerRecorded),
            "EVENT_TYPE_WORKFLOW_EXECUTION_SIGNALED" => Some(Self::WorkflowExecutionSignaled),
            "EVENT_TYPE_WORKFLOW_EXECUTION_TERMINATED" => Some(Self::WorkflowExecutionTerminated),
            "EVENT_TYPE_WORKFLOW_EXECUTION_CANCEL_REQUESTED" => {
                Some(Self::WorkflowExecutionCancelRequested)
            }
            "EVENT_TYPE_WORKFLOW_EXECUTION_CANCELED" => Some(Self::WorkflowExecutionCanceled),
            _ => None,
        }
    }
}

/// Why a workflow task failed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
)]
#[repr(i32)]
pub enum WorkflowTaskFailedCause {
    Unspecified = 0,
    UnhandledCommand = 1,
    BadScheduleActivityAttributes = 2,
    BadRequestCancelActivityAttributes = 3,
    BadStartTimerAttributes = 4,
    BadCancelTimerAttributes = 5,
    BadRecordMarkerAttributes = 6,
    BadCompleteWorkflowExecutionAttributes = 7,
    BadFailWorkflowExecutionAttributes = 8,
    BadCancelWorkflowExecutionAttributes = 9,
    NonDeterministicError = 23,
    WorkflowWorkerUnhandledFailure = 24,
}

impl WorkflowTaskFailedCause {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "WORKFLOW_TASK_FAILED_CAUSE_UNSPECIFIED",
            Self::UnhandledCommand => "WORKFLOW_TASK_FAILED_CAUSE_UNHANDLED_COMMAND",
            Self::BadScheduleActivityAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_SCHEDULE_ACTIVITY_ATTRIBUTES"
            }
            Self::BadRequestCancelActivityAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_REQUEST_CANCEL_ACTIVITY_ATTRIBUTES"
            }
            Self::BadStartTimerAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_START_TIMER_ATTRIBUTES"
            }
            Self::BadCancelTimerAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_CANCEL_TIMER_ATTRIBUTES"
            }
            Self::BadRecordMarkerAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_RECORD_MARKER_ATTRIBUTES"
            }
            Self::BadCompleteWorkflowExecutionAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_COMPLETE_WORKFLOW_EXECUTION_ATTRIBUTES"
            }
            Self::BadFailWorkflowExecutionAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_FAIL_WORKFLOW_EXECUTION_ATTRIBUTES"
            }
            Self::BadCancelWorkflowExecutionAttributes => {
                "WORKFLOW_TASK_FAILED_CAUSE_BAD_CANCEL_WORKFLOW_EXECUTION_ATTRIBUTES"
            }
            Self::NonDeterministicError => "WORKFLOW_TASK_FAILED_CAUSE_NON_DETERMINISTIC_ERROR",
            Self::WorkflowWorkerUnhandledFailure => {
                "WORKFLOW_TASK_FAILED_CAUSE_WORKFLOW_WORKER_UNHANDLED_FAILURE"
            }
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "WORKFLOW_TASK_FAILED_CAUSE_UNSPECIFIED" => Some(Self::Unspecified),
            "WORKFLOW_TASK_FAILED_CAUSE_UNHANDLED_COMMAND" => Some(Self::UnhandledCommand),
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_SCHEDULE_ACTIVITY_ATTRIBUTES" => {
                Some(Self::BadScheduleActivityAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_REQUEST_CANCEL_ACTIVITY_ATTRIBUTES" => {
                Some(Self::BadRequestCancelActivityAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_START_TIMER_ATTRIBUTES" => {
                Some(Self::BadStartTimerAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_CANCEL_TIMER_ATTRIBUTES" => {
                Some(Self::BadCancelTimerAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_RECORD_MARKER_ATTRIBUTES" => {
                Some(Self::BadRecordMarkerAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_COMPLETE_WORKFLOW_EXECUTION_ATTRIBUTES" => {
                Some(Self::BadCompleteWorkflowExecutionAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_FAIL_WORKFLOW_EXECUTION_ATTRIBUTES" => {
                Some(Self::BadFailWorkflowExecutionAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_BAD_CANCEL_WORKFLOW_EXECUTION_ATTRIBUTES" => {
                Some(Self::BadCancelWorkflowExecutionAttributes)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_NON_DETERMINISTIC_ERROR" => {
                Some(Self::NonDeterministicError)
            }
            "WORKFLOW_TASK_FAILED_CAUSE_WORKFLOW_WORKER_UNHANDLED_FAILURE" => {
                Some(Self::WorkflowWorkerUnhandledFailure)
            }
            _ => None,
        }
    }
}

/// Which timeout fired.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
)]
#[repr(i32)]
pub enum TimeoutType {
    Unspecified = 0,
    StartToClose = 1,
    ScheduleToStart = 2,
    ScheduleToClose = 3,
    Heartbeat = 4,
}

impl TimeoutType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "TIMEOUT_TYPE_UNSPECIFIED",
            Self::StartToClose => "TIMEOUT_TYPE_START_TO_CLOSE",
            Self::ScheduleToStart => "TIMEOUT_TYPE_SCHEDULE_TO_START",
            Self::ScheduleToClose => "TIMEOUT_TYPE_SCHEDULE_TO_CLOSE",
            Self::Heartbeat => "TIMEOUT_TYPE_HEARTBEAT",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TIMEOUT_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "TIMEOUT_TYPE_START_TO_CLOSE" => Some(Self::StartToClose),
            "TIMEOUT_TYPE_SCHEDULE_TO_START" => Some(Self::ScheduleToStart),
            "TIMEOUT_TYPE_SCHEDULE_TO_CLOSE" => Some(Self::ScheduleToClose),
            "TIMEOUT_TYPE_HEARTBEAT" => Some(Self::Heartbeat),
            _ => None,
        }
    }
}

/// Where a retrying execution stands when an attempt closes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
)]
#[repr(i32)]
pub enum RetryState {
    Unspecified = 0,
    InProgress = 1,
    NonRetryableFailure = 2,
    Timeout = 3,
    MaximumAttemptsReached = 4,
    RetryPolicyNotSet = 5,
    InternalServerError = 6,
    CancelRequested = 7,
}

impl RetryState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "RETRY_STATE_UNSPECIFIED",
            Self::InProgress => "RETRY_STATE_IN_PROGRESS",
            Self::NonRetryableFailure => "RETRY_STATE_NON_RETRYABLE_FAILURE",
            Self::Timeout => "RETRY_STATE_TIMEOUT",
            Self::MaximumAttemptsReached => "RETRY_STATE_MAXIMUM_ATTEMPTS_REACHED",
            Self::RetryPolicyNotSet => "RETRY_STATE_RETRY_POLICY_NOT_SET",
            Self::InternalServerError => "RETRY_STATE_INTERNAL_SERVER_ERROR",
            Self::CancelRequested => "RETRY_STATE_CANCEL_REQUESTED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "RETRY_STATE_UNSPECIFIED" => Some(Self::Unspecified),
            "RETRY_STATE_IN_PROGRESS" => Some(Self::InProgress),
            "RETRY_STATE_NON_RETRYABLE_FAILURE" => Some(Self::NonRetryableFailure),
            "RETRY_STATE_TIMEOUT" => Some(Self::Timeout),
            "RETRY_STATE_MAXIMUM_ATTEMPTS_REACHED" => Some(Self::MaximumAttemptsReached),
            "RETRY_STATE_RETRY_POLICY_NOT_SET" => Some(Self::RetryPolicyNotSet),
            "RETRY_STATE_INTERNAL_SERVER_ERROR" => Some(Self::InternalServerError),
            "RETRY_STATE_CANCEL_REQUESTED" => Some(Self::CancelRequested),
            _ => None,
        }
    }
}
