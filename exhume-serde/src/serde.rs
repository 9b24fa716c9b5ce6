use std::fmt::Debug;

pub mod json;
pub mod prost;

/// The `Serializer` trait defines the behavior for serializing values of type `T`.
pub trait Serializer<T> {
    /// Serializes a value of type `T` into a byte vector.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to be serialized.
    ///
    /// # Returns
    ///
    /// A byte vector containing the serialized representation of the value.
    fn serialize(&self, value: T) -> Vec<u8>;
}

/// The `Deserializer` trait defines the behavior for deserializing values of type `T`.
pub trait Deserializer<T> {
    /// The error type that can occur during deserialization.
    type Error: Debug;

    /// Deserializes a byte vector into a value of type `T`.
    ///
    /// # Arguments
    ///
    /// * `data` - The byte vector to be deserialized.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialized value on success, or an error on failure.
    fn deserialize(&self, data: Vec<u8>) -> Result<T, Self::Error>;
}

/// The `Serde` trait combines the `Serializer` and `Deserializer` traits for convenience.
pub trait Serde<T>: Serializer<T> + Deserializer<T> {}

impl<K, T> Serde<T> for K where K: Serializer<T> + Deserializer<T> {}
