// ── Object registry ──
//
// `ObjectKind` names every record type so callers holding only a string
// (a CLI argument, a config value) can reach the concrete type. Generic
// work goes through `KindVisitor`, which is handed the type itself.
//
// Records that only exist under a parent are named with that parent
// (`Client.Contact`, `Network.EventSubscribe`) because their bare CWMP
// names collide.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::ModelError;
use crate::model::{tr104, tr143, tr181, tr196};
use crate::schema::CwmpObject;

/// Broadband Forum technical report a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Standard {
    #[strum(serialize = "TR-104")]
    Tr104,
    #[strum(serialize = "TR-143")]
    Tr143,
    #[strum(serialize = "TR-181")]
    Tr181,
    #[strum(serialize = "TR-196")]
    Tr196,
}

impl Standard {
    /// Root container record of this family.
    pub fn root(self) -> ObjectKind {
        match self {
            Self::Tr104 => ObjectKind::Sip,
            Self::Tr143 => ObjectKind::QueueManagement,
            Self::Tr181 => ObjectKind::DeviceInfo,
            Self::Tr196 => ObjectKind::Phy,
        }
    }
}

/// Every record type in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ObjectKind {
    // ── TR-104 ──
    #[strum(serialize = "SIP")]
    Sip,
    Client,
    #[strum(serialize = "Client.Contact")]
    ClientContact,
    #[strum(serialize = "Client.EventSubscribe")]
    ClientEventSubscribe,
    Network,
    #[strum(serialize = "Network.FQDNServer")]
    NetworkFqdnServer,
    #[strum(serialize = "Network.EventSubscribe")]
    NetworkEventSubscribe,
    #[strum(serialize = "Network.ResponseMap")]
    NetworkResponseMap,
    Proxy,
    Registrar,
    #[strum(serialize = "Registrar.Account")]
    RegistrarAccount,

    // ── TR-143 ──
    QueueManagement,
    Classification,
    App,
    Policer,

    // ── TR-181 ──
    DeviceInfo,
    Location,
    MemoryStatus,
    NetworkProperties,
    Processor,
    ProxierInfo,
    SupportedDataModel,
    TemperatureStatus,
    #[strum(serialize = "TemperatureStatus.TemperatureSensor")]
    TemperatureSensor,
    VendorConfigFile,

    // ── TR-196 ──
    #[strum(serialize = "PHY")]
    Phy,
    AntennaInfo,
    #[strum(serialize = "PDSCH")]
    Pdsch,
    #[strum(serialize = "PRACH")]
    Prach,
    #[strum(serialize = "PRS")]
    Prs,
    #[strum(serialize = "PUCCH")]
    Pucch,
    #[strum(serialize = "PUSCH")]
    Pusch,
    #[strum(serialize = "PUSCH.ULRS")]
    UlRs,
    #[strum(serialize = "SRS")]
    Srs,
    #[strum(serialize = "TDDFrame")]
    TddFrame,
    #[strum(serialize = "ULPowerControl")]
    UlPowerControl,
    #[strum(serialize = "MBSFN")]
    Mbsfn,
    #[strum(serialize = "MBSFN.SFConfigList")]
    MbsfnSfConfig,
}

/// Generic operation run against the record type behind an [`ObjectKind`].
pub trait KindVisitor {
    type Output;

    fn visit<T: CwmpObject>(self) -> Self::Output;
}

impl ObjectKind {
    /// Hand the concrete record type to `visitor`.
    pub fn accept<V: KindVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::Sip => visitor.visit::<tr104::Sip>(),
            Self::Client => visitor.visit::<tr104::Client>(),
            Self::ClientContact => visitor.visit::<tr104::ClientContact>(),
            Self::ClientEventSubscribe => visitor.visit::<tr104::ClientEventSubscribe>(),
            Self::Network => visitor.visit::<tr104::Network>(),
            Self::NetworkFqdnServer => visitor.visit::<tr104::NetworkFqdnServer>(),
            Self::NetworkEventSubscribe => visitor.visit::<tr104::NetworkEventSubscribe>(),
            Self::NetworkResponseMap => visitor.visit::<tr104::NetworkResponseMap>(),
            Self::Proxy => visitor.visit::<tr104::Proxy>(),
            Self::Registrar => visitor.visit::<tr104::Registrar>(),
            Self::RegistrarAccount => visitor.visit::<tr104::RegistrarAccount>(),

            Self::QueueManagement => visitor.visit::<tr143::QueueManagement>(),
            Self::Classification => visitor.visit::<tr143::Classification>(),
            Self::App => visitor.visit::<tr143::App>(),
            Self::Policer => visitor.visit::<tr143::Policer>(),

            Self::DeviceInfo => visitor.visit::<tr181::DeviceInfo>(),
            Self::Location => visitor.visit::<tr181::Location>(),
            Self::MemoryStatus => visitor.visit::<tr181::MemoryStatus>(),
            Self::NetworkProperties => visitor.visit::<tr181::NetworkProperties>(),
            Self::Processor => visitor.visit::<tr181::Processor>(),
            Self::ProxierInfo => visitor.visit::<tr181::ProxierInfo>(),
            Self::SupportedDataModel => visitor.visit::<tr181::SupportedDataModel>(),
            Self::TemperatureStatus => visitor.visit::<tr181::TemperatureStatus>(),
            Self::TemperatureSensor => visitor.visit::<tr181::TemperatureSensor>(),
            Self::VendorConfigFile => visitor.visit::<tr181::VendorConfigFile>(),

            Self::Phy => visitor.visit::<tr196::Phy>(),
            Self::AntennaInfo => visitor.visit::<tr196::AntennaInfo>(),
            Self::Pdsch => visitor.visit::<tr196::Pdsch>(),
            Self::Prach => visitor.visit::<tr196::Prach>(),
            Self::Prs => visitor.visit::<tr196::Prs>(),
            Self::Pucch => visitor.visit::<tr196::Pucch>(),
            Self::Pusch => visitor.visit::<tr196::Pusch>(),
            Self::UlRs => visitor.visit::<tr196::UlRs>(),
            Self::Srs => visitor.visit::<tr196::Srs>(),
            Self::TddFrame => visitor.visit::<tr196::TddFrame>(),
            Self::UlPowerControl => visitor.visit::<tr196::UlPowerControl>(),
            Self::Mbsfn => visitor.visit::<tr196::Mbsfn>(),
            Self::MbsfnSfConfig => visitor.visit::<tr196::MbsfnSfConfig>(),
        }
    }

    pub fn standard(self) -> Standard {
        match self {
            Self::Sip
            | Self::Client
            | Self::ClientContact
            | Self::ClientEventSubscribe
            | Self::Network
            | Self::NetworkFqdnServer
            | Self::NetworkEventSubscribe
            | Self::NetworkResponseMap
            | Self::Proxy
            | Self::Registrar
            | Self::RegistrarAccount => Standard::Tr104,

            Self::QueueManagement | Self::Classification | Self::App | Self::Policer => {
                Standard::Tr143
            }

            Self::DeviceInfo
            | Self::Location
            | Self::MemoryStatus
            | Self::NetworkProperties
            | Self::Processor
            | Self::ProxierInfo
            | Self::SupportedDataModel
            | Self::TemperatureStatus
            | Self::TemperatureSensor
            | Self::VendorConfigFile => Standard::Tr181,

            Self::Phy
            | Self::AntennaInfo
            | Self::Pdsch
            | Self::Prach
            | Self::Prs
            | Self::Pucch
            | Self::Pusch
            | Self::UlRs
            | Self::Srs
            | Self::TddFrame
            | Self::UlPowerControl
            | Self::Mbsfn
            | Self::MbsfnSfConfig => Standard::Tr196,
        }
    }

    /// Whether this kind is the root container of its family.
    pub fn is_root(self) -> bool {
        self.standard().root() == self
    }

    /// Resolve a kind by name, case-insensitively.
    pub fn lookup(name: &str) -> Result<Self, ModelError> {
        name.trim()
            .parse()
            .map_err(|_| ModelError::UnknownObject {
                name: name.to_owned(),
            })
    }

    /// All kinds belonging to `standard`, in declaration order.
    pub fn of(standard: Standard) -> impl Iterator<Item = Self> {
        Self::iter().filter(move |k| k.standard() == standard)
    }
}
