use std::marker::PhantomData;

use prost::{bytes::Bytes, Message};

use crate::serde::{Deserializer, Serializer};

/// A binary serialization and deserialization module using Prost.
///
/// This module decodes and encodes the export container messages under the
/// fixed external schema compiled into `exhume-proto`.
#[derive(Debug, Clone, Copy)]
pub struct Prost<T>(PhantomData<T>)
where
    T: Message;

impl<T> Prost<T>
where
    T: Message,
{
    /// Creates a new instance of the `Prost` module.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Prost<T>
where
    T: Message,
{
    fn default() -> Self {
        Prost::new()
    }
}

impl<T> Serializer<T> for Prost<T>
where
    T: Message,
{
    /// Serializes the given message to Protobuf-encoded bytes.
    ///
    /// # Arguments
    ///
    /// * `value` - The message to be serialized.
    ///
    /// # Returns
    ///
    /// Serialized bytes representing the message in Protobuf format.
    fn serialize(&self, value: T) -> Vec<u8> {
        value.encode_to_vec()
    }
}

impl<T> Deserializer<T> for Prost<T>
where
    T: Message + Default,
{
    type Error = prost::DecodeError;

    /// Deserializes the given Protobuf-encoded bytes to produce a message of type `T`.
    ///
    /// The buffer must hold one complete message; anything that does not
    /// conform to the schema is a decode error, reported distinctly from
    /// any I/O concern of the caller.
    ///
    /// # Arguments
    ///
    /// * `data` - The Protobuf-encoded bytes to be deserialized.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialized message on success, or an error on failure.
    fn deserialize(&self, data: Vec<u8>) -> Result<T, Self::Error> {
        let buf = Bytes::from(data);

        T::decode(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serde::Serde;
    use exhume_proto::export::{WorkflowExecution, WorkflowExecutions};
    use exhume_proto::history::{History, HistoryEvent};

    fn roundtrip<S>(serde_module: &S, container: WorkflowExecutions) -> WorkflowExecutions
    where
        S: Serde<WorkflowExecutions>,
    {
        let data = serde_module.serialize(container);
        serde_module.deserialize(data).unwrap()
    }

    #[test]
    fn it_serialize_and_deserialize_prost_data() {
        let serde_module = Prost::<WorkflowExecutions>::new();

        let container = WorkflowExecutions {
            items: vec![WorkflowExecution {
                history: Some(History {
                    events: vec![HistoryEvent {
                        event_id: 1,
                        event_type: 1,
                        task_id: 1048576,
                        ..Default::default()
                    }],
                }),
            }],
        };

        let deserialized_container = roundtrip(&serde_module, container.clone());

        assert_eq!(container, deserialized_container);
    }

    #[test]
    fn it_fails_on_bytes_that_do_not_conform_to_the_schema() {
        let serde_module = Prost::<WorkflowExecutions>::new();

        // Field 1, length-delimited, promising five bytes where only one follows.
        let result = serde_module.deserialize(vec![0x0a, 0x05, 0x01]);

        assert!(result.is_err());
    }
}
