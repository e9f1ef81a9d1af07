mod json_parse_node;
mod json_serialization_writer;

pub use json_parse_node::JsonParseNode;
pub use json_serialization_writer::{JsonSerializationWriter, SerializationSettings};

use crate::serialization::{DeserializationError, Parsable, ParsableFactory, ParseNode, Serializable, SerializationError};

/// Decodes a JSON document into the model the factory picks for it.
pub fn deserialize_json<T: Parsable>(content: &[u8], factory: ParsableFactory<T>) -> Result<Option<T>, DeserializationError> {
    let value: serde_json::Value = serde_json::from_slice(content)?;
    let node = JsonParseNode::new(&value);
    (&node as &dyn ParseNode).object_value(factory)
}

pub fn serialize_json(model: &dyn Serializable, settings: SerializationSettings) -> Result<String, SerializationError> {
    let mut writer = JsonSerializationWriter::new(settings);
    model.serialize(&mut writer)?;
    writer.into_string()
}
