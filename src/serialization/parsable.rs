use crate::serialization::{AdditionalData, DeserializationError, ParseNode, SerializationError, SerializationWriter};
use std::collections::HashMap;

pub trait Serializable {
    /// Writes every declared field, base fields first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

pub trait Parsable: Serializable + Sized + 'static {
    fn field_deserializers() -> FieldDeserializers<Self>;

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }

    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), DeserializationError> {
        let deserializers = Self::field_deserializers();
        node.assign_fields(self, &deserializers)
    }
}

/// Creates the model a node decodes into. Polymorphic slots inspect the node to pick the variant.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, DeserializationError>;

pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), DeserializationError>>;

/// Maps a wire field name to the action that decodes it onto a `T`.
pub struct FieldDeserializers<T> {
    deserializers: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        FieldDeserializers {
            deserializers: HashMap::new(),
        }
    }

    /// Adds the action for `key`, replacing an inherited one.
    pub fn insert<F>(&mut self, key: &'static str, deserialize: F)
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), DeserializationError> + 'static,
    {
        self.deserializers.insert(key, Box::new(deserialize));
    }

    pub fn get(&self, key: &str) -> Option<&FieldDeserializer<T>> {
        self.deserializers.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.deserializers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.deserializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deserializers.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.deserializers.keys().copied()
    }

    /// Re-targets these actions onto a model `D` that embeds a `T`.
    pub fn lift<D: 'static>(self, project: fn(&mut D) -> &mut T) -> FieldDeserializers<D> {
        let deserializers = self
            .deserializers
            .into_iter()
            .map(|(key, deserialize)| {
                let lifted: FieldDeserializer<D> = Box::new(move |model: &mut D, node: &dyn ParseNode| deserialize(project(model), node));
                (key, lifted)
            })
            .collect();
        FieldDeserializers { deserializers }
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}
