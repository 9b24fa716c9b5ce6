//! # Workflow Export Message Definitions
//!
//! Prost message definitions mirroring the external, versioned protobuf
//! schema of the workflow export format: the export container, the event
//! history it wraps, and the common, failure and enum messages those
//! reference. The modules are kept in generated style — explicit field
//! tags, `i32`-backed enum fields with typed accessors, and
//! `as_str_name`/`from_str_name` on every enum — so they track the schema
//! source rather than any one consumer.
//!
//! The binary layout is owned by the external schema. This crate is the
//! only place in the workspace that knows it; unknown fields present in an
//! export are skipped on decode per protobuf semantics.
pub mod common;
pub mod enums;
pub mod export;
pub mod failure;
pub mod history;
