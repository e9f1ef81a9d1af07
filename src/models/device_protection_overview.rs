use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, ODATA_TYPE_KEY, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};

/// Threat protection state counts over the reporting devices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceProtectionOverview {
    additional_data: AdditionalData,
    clean_device_count: Option<i32>,
    critical_failures_device_count: Option<i32>,
    inactive_threat_agent_device_count: Option<i32>,
    odata_type: Option<String>,
    pending_full_scan_device_count: Option<i32>,
    pending_manual_steps_device_count: Option<i32>,
    pending_offline_scan_device_count: Option<i32>,
    pending_quick_scan_device_count: Option<i32>,
    pending_restart_device_count: Option<i32>,
    pending_signature_update_device_count: Option<i32>,
    total_reported_device_count: Option<i32>,
    unknown_state_threat_agent_device_count: Option<i32>,
}

impl DeviceProtectionOverview {
    pub fn new() -> Self {
        DeviceProtectionOverview::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(DeviceProtectionOverview::new())
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn clean_device_count(&self) -> Option<i32> {
        self.clean_device_count
    }

    pub fn critical_failures_device_count(&self) -> Option<i32> {
        self.critical_failures_device_count
    }

    pub fn inactive_threat_agent_device_count(&self) -> Option<i32> {
        self.inactive_threat_agent_device_count
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn pending_full_scan_device_count(&self) -> Option<i32> {
        self.pending_full_scan_device_count
    }

    pub fn pending_manual_steps_device_count(&self) -> Option<i32> {
        self.pending_manual_steps_device_count
    }

    pub fn pending_offline_scan_device_count(&self) -> Option<i32> {
        self.pending_offline_scan_device_count
    }

    pub fn pending_quick_scan_device_count(&self) -> Option<i32> {
        self.pending_quick_scan_device_count
    }

    pub fn pending_restart_device_count(&self) -> Option<i32> {
        self.pending_restart_device_count
    }

    pub fn pending_signature_update_device_count(&self) -> Option<i32> {
        self.pending_signature_update_device_count
    }

    pub fn total_reported_device_count(&self) -> Option<i32> {
        self.total_reported_device_count
    }

    pub fn unknown_state_threat_agent_device_count(&self) -> Option<i32> {
        self.unknown_state_threat_agent_device_count
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn set_clean_device_count(&mut self, value: Option<i32>) {
        self.clean_device_count = value;
    }

    pub fn set_critical_failures_device_count(&mut self, value: Option<i32>) {
        self.critical_failures_device_count = value;
    }

    pub fn set_inactive_threat_agent_device_count(&mut self, value: Option<i32>) {
        self.inactive_threat_agent_device_count = value;
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn set_pending_full_scan_device_count(&mut self, value: Option<i32>) {
        self.pending_full_scan_device_count = value;
    }

    pub fn set_pending_manual_steps_device_count(&mut self, value: Option<i32>) {
        self.pending_manual_steps_device_count = value;
    }

    pub fn set_pending_offline_scan_device_count(&mut self, value: Option<i32>) {
        self.pending_offline_scan_device_count = value;
    }

    pub fn set_pending_quick_scan_device_count(&mut self, value: Option<i32>) {
        self.pending_quick_scan_device_count = value;
    }

    pub fn set_pending_restart_device_count(&mut self, value: Option<i32>) {
        self.pending_restart_device_count = value;
    }

    pub fn set_pending_signature_update_device_count(&mut self, value: Option<i32>) {
        self.pending_signature_update_device_count = value;
    }

    pub fn set_total_reported_device_count(&mut self, value: Option<i32>) {
        self.total_reported_device_count = value;
    }

    pub fn set_unknown_state_threat_agent_device_count(&mut self, value: Option<i32>) {
        self.unknown_state_threat_agent_device_count = value;
    }
}

impl Parsable for DeviceProtectionOverview {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert("cleanDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_clean_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("criticalFailuresDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_critical_failures_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("inactiveThreatAgentDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_inactive_threat_agent_device_count(Some(value));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_odata_type(Some(value));
            }
            Ok(())
        });
        res.insert("pendingFullScanDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_full_scan_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingManualStepsDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_manual_steps_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingOfflineScanDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_offline_scan_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingQuickScanDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_quick_scan_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingRestartDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_restart_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("pendingSignatureUpdateDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_pending_signature_update_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("totalReportedDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_total_reported_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("unknownStateThreatAgentDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_unknown_state_threat_agent_device_count(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

impl Serializable for DeviceProtectionOverview {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_i32_value("cleanDeviceCount", self.clean_device_count)?;
        writer.write_i32_value("criticalFailuresDeviceCount", self.critical_failures_device_count)?;
        writer.write_i32_value("inactiveThreatAgentDeviceCount", self.inactive_threat_agent_device_count)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_i32_value("pendingFullScanDeviceCount", self.pending_full_scan_device_count)?;
        writer.write_i32_value("pendingManualStepsDeviceCount", self.pending_manual_steps_device_count)?;
        writer.write_i32_value("pendingOfflineScanDeviceCount", self.pending_offline_scan_device_count)?;
        writer.write_i32_value("pendingQuickScanDeviceCount", self.pending_quick_scan_device_count)?;
        writer.write_i32_value("pendingRestartDeviceCount", self.pending_restart_device_count)?;
        writer.write_i32_value("pendingSignatureUpdateDeviceCount", self.pending_signature_update_device_count)?;
        writer.write_i32_value("totalReportedDeviceCount", self.total_reported_device_count)?;
        writer.write_i32_value("unknownStateThreatAgentDeviceCount", self.unknown_state_threat_agent_device_count)?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }
}
