mod advanced_threat_protection_onboarding_device_setting_state;
mod advanced_threat_protection_onboarding_state_summary;
mod android_device_owner_general_device_configuration;
mod android_device_owner_user_facing_message;
mod android_device_owner_wi_fi_configuration;
mod app_list_item;
mod device_configuration;
mod device_configuration_device_overview;
mod device_protection_overview;
mod entity;
mod enums;
mod key_value_pair;

pub use advanced_threat_protection_onboarding_device_setting_state::AdvancedThreatProtectionOnboardingDeviceSettingState;
pub use advanced_threat_protection_onboarding_state_summary::AdvancedThreatProtectionOnboardingStateSummary;
pub use android_device_owner_general_device_configuration::AndroidDeviceOwnerGeneralDeviceConfiguration;
pub use android_device_owner_user_facing_message::AndroidDeviceOwnerUserFacingMessage;
pub use android_device_owner_wi_fi_configuration::AndroidDeviceOwnerWiFiConfiguration;
pub use app_list_item::AppListItem;
pub use device_configuration::{DeviceConfiguration, DeviceConfigurationKind};
pub use device_configuration_device_overview::DeviceConfigurationDeviceOverview;
pub use device_protection_overview::DeviceProtectionOverview;
pub use entity::Entity;
pub use enums::{
    AndroidDeviceOwnerAppAutoUpdatePolicyType, AndroidDeviceOwnerBatteryPluggedMode, AndroidDeviceOwnerPlayStoreMode,
    AndroidDeviceOwnerRequiredPasswordType, AndroidDeviceOwnerSystemUpdateInstallType, AndroidDeviceOwnerWiFiSecurityType, AndroidKeyguardFeature,
    ComplianceStatus, DeviceType, WiFiProxySetting,
};
pub use key_value_pair::KeyValuePair;
