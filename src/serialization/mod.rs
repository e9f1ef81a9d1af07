mod discriminator;
mod enum_codec;
mod error;
pub mod json;
mod number;
mod parsable;
mod parse_node;
mod serialization_writer;
#[cfg(test)]
pub(crate) mod test_support;
mod untyped_value;

pub use discriminator::{
    create_from_discriminator_value, known_discriminators, register_discriminator, Discriminated, DiscriminatorFamily, DiscriminatorRegistry,
    ODATA_TYPE_KEY,
};
pub use enum_codec::EnumCodec;
pub use error::{DeserializationError, SerializationError};
pub use number::Number;
pub use parsable::{FieldDeserializer, FieldDeserializers, Parsable, ParsableFactory, Serializable};
pub use parse_node::ParseNode;
pub use serialization_writer::SerializationWriter;
pub use untyped_value::{AdditionalData, UntypedValue};
