//! The top-level export container.

/// One exported workflow execution record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecution {
    #[prost(message, optional, tag = "1")]
    pub history: ::core::option::Option<super::history::History>,
}

/// The export container: a sequence of workflow execution records.
///
/// The container format itself places no bound on how many records an
/// export holds; consumers impose their own policies.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkflowExecutions {
    #[prost(message, repeated, tag = "1")]
    pub items: ::prost::alloc::vec::Vec<WorkflowExecution>,
}
