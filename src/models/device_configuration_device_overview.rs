use crate::models::Entity;
use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};
use chrono::{DateTime, FixedOffset};

/// Device installation status counts of one configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfigurationDeviceOverview {
    entity: Entity,
    configuration_version: Option<i32>,
    conflict_count: Option<i32>,
    error_count: Option<i32>,
    failed_count: Option<i32>,
    last_update_date_time: Option<DateTime<FixedOffset>>,
    not_applicable_count: Option<i32>,
    not_applicable_platform_count: Option<i32>,
    pending_count: Option<i32>,
    success_count: Option<i32>,
}

impl DeviceConfigurationDeviceOverview {
    pub fn new() -> Self {
        DeviceConfigurationDeviceOverview::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(DeviceConfigurationDeviceOverview::new())
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn configuration_version(&self) -> Option<i32> {
        self.configuration_version
    }

    pub fn conflict_count(&self) -> Option<i32> {
        self.conflict_count
    }

    pub fn error_count(&self) -> Option<i32> {
        self.error_count
    }

    pub fn failed_count(&self) -> Option<i32> {
        self.failed_count
    }

    pub fn last_update_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.last_update_date_time.as_ref()
    }

    pub fn not_applicable_count(&self) -> Option<i32> {
        self.not_applicable_count
    }

    pub fn not_applicable_platform_count(&self) -> Option<i32> {
        self.not_applicable_platform_count
    }

    pub fn pending_count(&self) -> Option<i32> {
        self.pending_count
    }

    pub fn success_count(&self) -> Option<i32> {
        self.success_count
    }

    pub fn set_configuration_version(&mut self, value: Option<i32>) {
        self.configuration_version = value;
    }

    pub fn set_conflict_count(&mut self, value: Option<i32>) {
        self.conflict_count = value;
    }

    pub fn set_error_count(&mut self, value: Option<i32>) {
        self.error_count = value;
    }

    pub fn set_failed_count(&mut self, value: Option<i32>) {
        self.failed_count = value;
    }

    pub fn set_last_update_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_update_date_time = value;
    }

    pub fn set_not_applicable_count(&mut self, value: Option<i32>) {
        self.not_applicable_count = value;
    }

    pub fn set_not_applicable_platform_count(&mut self, value: Option<i32>) {
        self.not_applicable_platform_count = value;
    }

    pub fn set_pending_count(&mut self, value: Option<i32>) {
        self.pending_count = value;
    }

    pub fn set_success_count(&mut self, value: Option<i32>) {
        self.success_count = value;
    }
}

impl Parsable for DeviceConfigurationDeviceOverview {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = Entity::field_deserializers().lift(Self::entity_mut);
        res.insert("configurationVersion", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_configuration_version(Some(value));
            }
            Ok(())
        });
        res.insert("conflictCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_conflict_count(Some(value));
            }
            Ok(())
        });
        res.insert("errorCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_error_count(Some(value));
            }
            Ok(())
        });
        res.insert("failedCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_failed_count(Some(value));
            }
            Ok(())
        });
        res.insert("lastUpdateDateTime", |m, n| {
            if let Some(value) = n.date_time_value()? {
                m.set_last_update_date_time(Some(value));
            }
            Ok(())
        });
        res.insert("notApplicableCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_not_applicable_count(Some(value));
            }
            Ok(())
        });
        res.insert("notApplicablePlatformCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_not_applicable_platform_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_count(Some(value));
            }
            Ok(())
        });
        res.insert("successCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_success_count(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.entity.additional_data_mut()
    }
}

impl Serializable for DeviceConfigurationDeviceOverview {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_i32_value("configurationVersion", self.configuration_version)?;
        writer.write_i32_value("conflictCount", self.conflict_count)?;
        writer.write_i32_value("errorCount", self.error_count)?;
        writer.write_i32_value("failedCount", self.failed_count)?;
        writer.write_date_time_value("lastUpdateDateTime", self.last_update_date_time.as_ref())?;
        writer.write_i32_value("notApplicableCount", self.not_applicable_count)?;
        writer.write_i32_value("notApplicablePlatformCount", self.not_applicable_platform_count)?;
        writer.write_i32_value("pendingCount", self.pending_count)?;
        writer.write_i32_value("successCount", self.success_count)?;
        Ok(())
    }
}
