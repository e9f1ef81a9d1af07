use model_macros::WireEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerPlayStoreMode {
    NotConfigured,
    /// Only apps on the managed list are available.
    AllowList,
    /// Everything except the managed list is available.
    BlockList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerAppAutoUpdatePolicyType {
    NotConfigured,
    UserChoice,
    Never,
    WiFiOnly,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerRequiredPasswordType {
    DeviceDefault,
    Required,
    Numeric,
    NumericComplex,
    Alphabetic,
    Alphanumeric,
    AlphanumericWithSymbols,
    LowSecurityBiometric,
    CustomPassword,
}

/// Keyguard features that can be disabled on the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidKeyguardFeature {
    NotConfigured,
    Camera,
    Notifications,
    UnredactedNotifications,
    TrustAgents,
    Fingerprint,
    RemoteInput,
    AllFeatures,
    Face,
    Iris,
    Biometrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerBatteryPluggedMode {
    NotConfigured,
    Ac,
    Usb,
    Wireless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerSystemUpdateInstallType {
    DeviceDefault,
    Postpone,
    Windowed,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AndroidDeviceOwnerWiFiSecurityType {
    Open,
    Wep,
    WpaPersonal,
    WpaEnterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum WiFiProxySetting {
    None,
    Manual,
    Automatic,
    UnknownFutureValue,
}

/// Platform of a managed device. Several wire names keep the vendor's capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum DeviceType {
    Desktop,
    #[wire(rename = "windowsRT")]
    WindowsRt,
    #[wire(rename = "winMO6")]
    WinMo6,
    Nokia,
    WindowsPhone,
    Mac,
    #[wire(rename = "winCE")]
    WinCe,
    WinEmbedded,
    #[wire(rename = "iPhone")]
    IPhone,
    #[wire(rename = "iPad")]
    IPad,
    #[wire(rename = "iPod")]
    IPod,
    Android,
    #[wire(rename = "iSocConsumer")]
    ISocConsumer,
    Unix,
    #[wire(rename = "macMDM")]
    MacMdm,
    HoloLens,
    SurfaceHub,
    AndroidForWork,
    AndroidEnterprise,
    #[wire(rename = "windows10x")]
    Windows10x,
    #[wire(rename = "androidnGMS")]
    AndroidnGms,
    #[wire(rename = "chromeOS")]
    ChromeOs,
    Linux,
    Blackberry,
    Palm,
    Unknown,
    #[wire(rename = "cloudPC")]
    CloudPc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum ComplianceStatus {
    Unknown,
    NotApplicable,
    Compliant,
    Remediated,
    NonCompliant,
    Error,
    Conflict,
    NotAssigned,
}
