//! # Export Serialization Deserialization Library
//!
//! This library provides traits and implementations for serializing and deserializing
//! the messages of the workflow export format: binary container decode (Prost) and
//! canonical JSON rendering of event histories.
pub mod serde;
pub use crate::serde::{Deserializer, Serde, Serializer};
