//! Messages shared across the export schema.

/// Identifies one workflow execution by workflow id and run id.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecution {
    #[prost(string, tag = "1")]
    pub workflow_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub run_id: ::prost::alloc::string::String,
}

/// The registered name of a workflow implementation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowType {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The registered name of an activity implementation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityType {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The queue a workflow or activity task is dispatched on.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TaskQueue {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// One serialized value passed to or returned from workflow code, together
/// with metadata describing its encoding.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payload {
    #[prost(btree_map = "string, bytes", tag = "1")]
    pub metadata: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        ::prost::alloc::vec::Vec<u8>,
    >,
    #[prost(bytes = "vec", tag = "2")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

/// An ordered list of payloads.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payloads {
    #[prost(message, repeated, tag = "1")]
    pub payloads: ::prost::alloc::vec::Vec<Payload>,
}
