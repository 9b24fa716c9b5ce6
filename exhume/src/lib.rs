#![doc = include_str!("../README.md")]

mod error;
mod export;
mod source;

#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::export::{decode, history_json, load_container, render_history, single_execution};

/// Message definitions for the workflow export format.
#[doc(inline)]
pub use exhume_proto as proto;

pub mod serde {
    //! Export serialization and deserialization.
    #[doc(inline)]
    pub use exhume_serde::serde::json;
    #[doc(inline)]
    pub use exhume_serde::serde::prost;
    #[doc(inline)]
    pub use exhume_serde::{Deserializer, Serde, Serializer};
}
