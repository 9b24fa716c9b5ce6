//! Structured failure records carried by history events.

/// A structured error raised by workflow, activity or server code.
///
/// Failures chain: `cause` points at the failure that produced this one,
/// down to the root cause. The `failure_info` variant describes which layer
/// the failure originated in.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Failure {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
    /// The SDK or component this failure originated in.
    #[prost(string, tag = "2")]
    pub source: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub stack_trace: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "4")]
    pub cause: ::core::option::Option<::prost::alloc::boxed::Box<Failure>>,
    #[prost(oneof = "failure::FailureInfo", tags = "5, 6, 7, 8, 9")]
    pub failure_info: ::core::option::Option<failure::FailureInfo>,
}

/// Nested message and enum types in `Failure`.
pub mod failure {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FailureInfo {
        #[prost(message, tag = "5")]
        ApplicationFailureInfo(super::ApplicationFailureInfo),
        #[prost(message, tag = "6")]
        TimeoutFailureInfo(super::TimeoutFailureInfo),
        #[prost(message, tag = "7")]
        CanceledFailureInfo(super::CanceledFailureInfo),
        #[prost(message, tag = "8")]
        TerminatedFailureInfo(super::TerminatedFailureInfo),
        #[prost(message, tag = "9")]
        ServerFailureInfo(super::ServerFailureInfo),
    }
}

/// A failure raised by application code.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplicationFailureInfo {
    /// The application-defined error type.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub non_retryable: bool,
    #[prost(message, optional, tag = "3")]
    pub details: ::core::option::Option<super::common::Payloads>,
}

/// A failure caused by a timeout firing.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeoutFailureInfo {
    #[prost(enumeration = "super::enums::TimeoutType", tag = "1")]
    pub timeout_type: i32,
    #[prost(message, optional, tag = "2")]
    pub last_heartbeat_details: ::core::option::Option<super::common::Payloads>,
}

/// A failure caused by cancellation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CanceledFailureInfo {
    #[prost(message, optional, tag = "1")]
    pub details: ::core::option::Option<super::common::Payloads>,
}

/// A failure caused by termination of the execution.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TerminatedFailureInfo {}

/// A failure raised by the orchestration server itself.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerFailureInfo {
    #[prost(bool, tag = "1")]
    pub non_retryable: bool,
}
