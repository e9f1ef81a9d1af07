use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, ODATA_TYPE_KEY, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};

/// An app shown on a managed home screen or in an allow or block list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppListItem {
    additional_data: AdditionalData,
    app_id: Option<String>,
    app_store_url: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
    publisher: Option<String>,
}

impl AppListItem {
    pub fn new() -> Self {
        AppListItem::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AppListItem::new())
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    /// The application or bundle identifier.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn app_store_url(&self) -> Option<&str> {
        self.app_store_url.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn set_app_store_url(&mut self, value: Option<String>) {
        self.app_store_url = value;
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn set_publisher(&mut self, value: Option<String>) {
        self.publisher = value;
    }
}

impl Parsable for AppListItem {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert("appId", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_app_id(Some(value));
            }
            Ok(())
        });
        res.insert("appStoreUrl", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_app_store_url(Some(value));
            }
            Ok(())
        });
        res.insert("name", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_name(Some(value));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_odata_type(Some(value));
            }
            Ok(())
        });
        res.insert("publisher", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_publisher(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

impl Serializable for AppListItem {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("appId", self.app_id())?;
        writer.write_string_value("appStoreUrl", self.app_store_url())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("publisher", self.publisher())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }
}
