use crate::models::{AndroidDeviceOwnerGeneralDeviceConfiguration, AndroidDeviceOwnerWiFiConfiguration, DeviceConfigurationDeviceOverview, Entity};
use crate::serialization::{
    AdditionalData, DeserializationError, DiscriminatorFamily, DiscriminatorRegistry, FieldDeserializers, Parsable, ParseNode, Serializable,
    SerializationError, SerializationWriter, create_from_discriminator_value,
};
use chrono::{DateTime, FixedOffset};
use std::sync::LazyLock;

static DEVICE_CONFIGURATION_REGISTRY: LazyLock<DiscriminatorRegistry<DeviceConfigurationKind>> = LazyLock::new(Default::default);

/// Fields shared by every device configuration profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfiguration {
    entity: Entity,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    device_status_overview: Option<DeviceConfigurationDeviceOverview>,
    display_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    role_scope_tag_ids: Option<Vec<String>>,
    supports_scope_tags: Option<bool>,
    version: Option<i32>,
}

impl DeviceConfiguration {
    pub fn new() -> Self {
        DeviceConfiguration::default()
    }

    pub fn with_odata_type(odata_type: &str) -> Self {
        DeviceConfiguration {
            entity: Entity::with_odata_type(odata_type),
            ..DeviceConfiguration::default()
        }
    }

    /// Picks the concrete profile from the `@odata.type` of the node.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<DeviceConfigurationKind, DeserializationError> {
        create_from_discriminator_value(node)
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn created_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.created_date_time.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn device_status_overview(&self) -> Option<&DeviceConfigurationDeviceOverview> {
        self.device_status_overview.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn last_modified_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.last_modified_date_time.as_ref()
    }

    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn supports_scope_tags(&self) -> Option<bool> {
        self.supports_scope_tags
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn set_device_status_overview(&mut self, value: Option<DeviceConfigurationDeviceOverview>) {
        self.device_status_overview = value;
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    pub fn set_supports_scope_tags(&mut self, value: Option<bool>) {
        self.supports_scope_tags = value;
    }

    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
}

impl Parsable for DeviceConfiguration {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = Entity::field_deserializers().lift(Self::entity_mut);
        res.insert("createdDateTime", |m, n| {
            if let Some(value) = n.date_time_value()? {
                m.set_created_date_time(Some(value));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_description(Some(value));
            }
            Ok(())
        });
        res.insert("deviceStatusOverview", |m, n| {
            if let Some(value) = n.object_value(DeviceConfigurationDeviceOverview::create_from_discriminator_value)? {
                m.set_device_status_overview(Some(value));
            }
            Ok(())
        });
        res.insert("displayName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_display_name(Some(value));
            }
            Ok(())
        });
        res.insert("lastModifiedDateTime", |m, n| {
            if let Some(value) = n.date_time_value()? {
                m.set_last_modified_date_time(Some(value));
            }
            Ok(())
        });
        res.insert("roleScopeTagIds", |m, n| {
            if let Some(value) = n.collection_of_string_values()? {
                m.set_role_scope_tag_ids(Some(value));
            }
            Ok(())
        });
        res.insert("supportsScopeTags", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_supports_scope_tags(Some(value));
            }
            Ok(())
        });
        res.insert("version", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_version(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.entity.additional_data_mut()
    }
}

impl Serializable for DeviceConfiguration {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description())?;
        if let Some(overview) = &self.device_status_overview {
            writer.write_object_value("deviceStatusOverview", overview)?;
        }
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        if let Some(role_scope_tag_ids) = &self.role_scope_tag_ids {
            writer.write_collection_of_string_values("roleScopeTagIds", role_scope_tag_ids)?;
        }
        writer.write_bool_value("supportsScopeTags", self.supports_scope_tags)?;
        writer.write_i32_value("version", self.version)?;
        Ok(())
    }
}

/// Any device configuration profile. Decoding picks the variant from the payload's type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceConfigurationKind {
    DeviceConfiguration(DeviceConfiguration),
    AndroidDeviceOwnerGeneral(Box<AndroidDeviceOwnerGeneralDeviceConfiguration>),
    AndroidDeviceOwnerWiFi(Box<AndroidDeviceOwnerWiFiConfiguration>),
}

impl DeviceConfigurationKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        create_from_discriminator_value(node)
    }

    pub fn device_configuration(&self) -> &DeviceConfiguration {
        match self {
            DeviceConfigurationKind::DeviceConfiguration(configuration) => configuration,
            DeviceConfigurationKind::AndroidDeviceOwnerGeneral(configuration) => configuration.device_configuration(),
            DeviceConfigurationKind::AndroidDeviceOwnerWiFi(configuration) => configuration.device_configuration(),
        }
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        match self {
            DeviceConfigurationKind::DeviceConfiguration(configuration) => configuration,
            DeviceConfigurationKind::AndroidDeviceOwnerGeneral(configuration) => configuration.device_configuration_mut(),
            DeviceConfigurationKind::AndroidDeviceOwnerWiFi(configuration) => configuration.device_configuration_mut(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.device_configuration().entity().odata_type()
    }
}

impl From<DeviceConfiguration> for DeviceConfigurationKind {
    fn from(value: DeviceConfiguration) -> Self {
        DeviceConfigurationKind::DeviceConfiguration(value)
    }
}

impl From<AndroidDeviceOwnerGeneralDeviceConfiguration> for DeviceConfigurationKind {
    fn from(value: AndroidDeviceOwnerGeneralDeviceConfiguration) -> Self {
        DeviceConfigurationKind::AndroidDeviceOwnerGeneral(Box::new(value))
    }
}

impl From<AndroidDeviceOwnerWiFiConfiguration> for DeviceConfigurationKind {
    fn from(value: AndroidDeviceOwnerWiFiConfiguration) -> Self {
        DeviceConfigurationKind::AndroidDeviceOwnerWiFi(Box::new(value))
    }
}

impl DiscriminatorFamily for DeviceConfigurationKind {
    fn registry() -> &'static DiscriminatorRegistry<Self> {
        &DEVICE_CONFIGURATION_REGISTRY
    }

    fn fallback() -> Self {
        DeviceConfigurationKind::DeviceConfiguration(DeviceConfiguration::new())
    }
}

impl Parsable for DeviceConfigurationKind {
    fn field_deserializers() -> FieldDeserializers<Self> {
        DeviceConfiguration::field_deserializers().lift(Self::device_configuration_mut)
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.device_configuration_mut().additional_data_mut()
    }

    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), DeserializationError> {
        match self {
            DeviceConfigurationKind::DeviceConfiguration(configuration) => configuration.deserialize_fields(node),
            DeviceConfigurationKind::AndroidDeviceOwnerGeneral(configuration) => configuration.deserialize_fields(node),
            DeviceConfigurationKind::AndroidDeviceOwnerWiFi(configuration) => configuration.deserialize_fields(node),
        }
    }
}

impl Serializable for DeviceConfigurationKind {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            DeviceConfigurationKind::DeviceConfiguration(configuration) => configuration.serialize(writer),
            DeviceConfigurationKind::AndroidDeviceOwnerGeneral(configuration) => configuration.serialize(writer),
            DeviceConfigurationKind::AndroidDeviceOwnerWiFi(configuration) => configuration.serialize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AndroidDeviceOwnerPlayStoreMode;
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter, SerializationSettings, deserialize_json};
    use crate::serialization::test_support::{Recorded, RecordingWriter};
    use crate::serialization::{Discriminated, known_discriminators};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn decode(json: serde_json::Value) -> Result<Option<DeviceConfigurationKind>, DeserializationError> {
        deserialize_json(json.to_string().as_bytes(), DeviceConfigurationKind::create_from_discriminator_value)
    }

    #[test]
    fn both_android_profiles_are_registered() {
        let known = known_discriminators::<DeviceConfigurationKind>();
        assert!(known.contains(&AndroidDeviceOwnerGeneralDeviceConfiguration::ODATA_TYPE));
        assert!(known.contains(&AndroidDeviceOwnerWiFiConfiguration::ODATA_TYPE));
    }

    #[test]
    fn dispatches_on_the_type_tag() -> Result<(), DeserializationError> {
        let configuration = decode(json!({
            "@odata.type": "#microsoft.graph.androidDeviceOwnerGeneralDeviceConfiguration",
            "displayName": "Kiosk",
            "playStoreMode": "blockList"
        }))?
        .expect("an object");

        match &configuration {
            DeviceConfigurationKind::AndroidDeviceOwnerGeneral(general) => {
                assert_eq!(general.play_store_mode(), Some(AndroidDeviceOwnerPlayStoreMode::BlockList));
            }
            other => panic!("expected the general profile, found {:?}", other),
        }
        assert_eq!(configuration.device_configuration().display_name(), Some("Kiosk"));
        Ok(())
    }

    #[test]
    fn unknown_or_missing_tags_fall_back_to_the_base_type() -> Result<(), DeserializationError> {
        let unknown = decode(json!({ "@odata.type": "#microsoft.graph.windows81GeneralConfiguration", "version": 3 }))?.expect("an object");
        let missing = decode(json!({ "version": 4 }))?.expect("an object");

        assert!(matches!(unknown, DeviceConfigurationKind::DeviceConfiguration(_)));
        assert_eq!(unknown.odata_type(), Some("#microsoft.graph.windows81GeneralConfiguration"));
        assert_eq!(unknown.device_configuration().version(), Some(3));
        assert!(matches!(missing, DeviceConfigurationKind::DeviceConfiguration(_)));
        assert_eq!(missing.device_configuration().version(), Some(4));
        Ok(())
    }

    #[test]
    fn null_payload_decodes_to_nothing() -> Result<(), DeserializationError> {
        assert_eq!(decode(json!(null))?, None);
        Ok(())
    }

    #[test]
    fn a_non_string_tag_is_an_error() {
        let result = decode(json!({ "@odata.type": 12 }));
        assert!(matches!(result, Err(DeserializationError::UnexpectedType { expected: "string", .. })));
    }

    #[test]
    fn base_fields_are_written_before_derived_fields() -> Result<(), SerializationError> {
        let mut configuration = DeviceConfiguration::new();
        configuration.entity_mut().set_id(Some("cfg-1".to_string()));
        configuration.set_role_scope_tag_ids(Some(vec!["0".to_string()]));

        let mut writer = RecordingWriter::new();
        configuration.serialize(&mut writer)?;

        assert_eq!(
            writer.keys(),
            vec![
                "id",
                "@odata.type",
                "<additionalData>",
                "createdDateTime",
                "description",
                "displayName",
                "lastModifiedDateTime",
                "roleScopeTagIds",
                "supportsScopeTags",
                "version"
            ]
        );
        assert_eq!(writer.get("id"), Some(&Recorded::String(Some("cfg-1".to_string()))));
        assert_eq!(writer.get("version"), Some(&Recorded::I32(None)));
        Ok(())
    }

    #[test]
    fn nested_overview_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let json = json!({
            "id": "cfg-2",
            "deviceStatusOverview": { "id": "overview", "successCount": 10, "errorCount": 1 },
            "roleScopeTagIds": ["0", "7"],
            "version": 2
        });
        let mut configuration = DeviceConfiguration::new();
        configuration.deserialize_fields(&JsonParseNode::new(&json))?;

        let mut writer = JsonSerializationWriter::new(SerializationSettings::new(true, false));
        configuration.serialize(&mut writer)?;
        let written = writer.into_value()?;

        let mut decoded = DeviceConfiguration::new();
        decoded.deserialize_fields(&JsonParseNode::new(&written))?;
        assert_eq!(decoded, configuration);
        assert_eq!(decoded.device_status_overview().and_then(|overview| overview.success_count()), Some(10));
        Ok(())
    }
}
