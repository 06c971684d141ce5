// ── CWMP object families ──
//
// One module per Broadband Forum technical report. Each family has a root
// container record (`Sip`, `QueueManagement`, `DeviceInfo`, `Phy`) that a
// document deserializes into; every other record can also stand alone.

pub mod common;

pub mod tr104;
pub mod tr143;
pub mod tr181;
pub mod tr196;

// ── Re-exports ──────────────────────────────────────────────────────

pub use common::{AUTO, EnableStatus, MacAddress, Origin, Status, TransportProtocol, UNUSED};

pub use tr104::{
    Client, ClientContact, ClientEventSubscribe, Network, NetworkEventSubscribe,
    NetworkFqdnServer, NetworkResponseMap, Proxy, Registrar, RegistrarAccount, Sip,
};
pub use tr143::{App, Classification, Policer, QueueManagement};
pub use tr181::{
    DeviceInfo, Location, MemoryStatus, NetworkProperties, Processor, ProxierInfo,
    SupportedDataModel, TemperatureSensor, TemperatureStatus, VendorConfigFile,
};
pub use tr196::{
    AntennaInfo, Mbsfn, MbsfnSfConfig, Pdsch, Phy, Prach, Prs, Pucch, Pusch, Srs, TddFrame,
    UlPowerControl, UlRs,
};
