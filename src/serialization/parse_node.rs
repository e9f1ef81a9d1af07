use crate::serialization::{DeserializationError, EnumCodec, FieldDeserializers, Parsable, ParsableFactory, UntypedValue};
use chrono::{DateTime, FixedOffset};
use tracing::{debug, trace};

/// A cursor over one value of a structured document. Reads return `Ok(None)` for null.
pub trait ParseNode {
    fn is_null(&self) -> bool;

    fn child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>>;

    /// The entries of an object, in document order.
    fn fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, DeserializationError>;

    fn elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, DeserializationError>;

    fn string_value(&self) -> Result<Option<String>, DeserializationError>;

    fn bool_value(&self) -> Result<Option<bool>, DeserializationError>;

    fn i32_value(&self) -> Result<Option<i32>, DeserializationError>;

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, DeserializationError>;

    fn untyped_value(&self) -> Result<UntypedValue, DeserializationError>;
}

impl<'n> dyn ParseNode + 'n {
    pub fn enum_value<E: EnumCodec>(&self) -> Result<Option<E>, DeserializationError> {
        self.string_value()?.map(|value| E::decode(&value)).transpose()
    }

    pub fn collection_of_enum_values<E: EnumCodec>(&self) -> Result<Option<Vec<E>>, DeserializationError> {
        let Some(elements) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(value) = element.enum_value::<E>()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn collection_of_string_values(&self) -> Result<Option<Vec<String>>, DeserializationError> {
        let Some(elements) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(value) = element.string_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn object_value<T: Parsable>(&self, factory: ParsableFactory<T>) -> Result<Option<T>, DeserializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut model = factory(self)?;
        model.deserialize_fields(self)?;
        Ok(Some(model))
    }

    pub fn collection_of_object_values<T: Parsable>(&self, factory: ParsableFactory<T>) -> Result<Option<Vec<T>>, DeserializationError> {
        let Some(elements) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(value) = element.object_value(factory)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Runs the matching deserializer for every entry of this object against `model`. Entries without a
    /// deserializer go to the model's additional data, if it keeps any. Stops at the first error, the
    /// fields assigned before it keep their values.
    pub fn assign_fields<T: Parsable>(&self, model: &mut T, deserializers: &FieldDeserializers<T>) -> Result<(), DeserializationError> {
        if self.is_null() {
            return Ok(());
        }

        for (key, node) in self.fields()? {
            match deserializers.get(&key) {
                Some(deserialize) => {
                    deserialize(model, node.as_ref()).inspect_err(|err| debug!(field = %key, "failed to deserialize field: {}", err))?;
                }
                None => match model.additional_data_mut() {
                    Some(additional_data) => {
                        additional_data.insert(key, node.untyped_value()?);
                    }
                    None => trace!(field = %key, "skipping undeclared field"),
                },
            }
        }

        Ok(())
    }
}
