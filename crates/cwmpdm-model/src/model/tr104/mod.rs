// ── TR-104 voice service: SIP ──
//
// VoiceService.{i}.SIP. -- clients, networks, proxies and registrars.

pub mod client;
pub mod network;
pub mod proxy;
pub mod registrar;

pub use client::{Client, ClientContact, ClientEventSubscribe, RegisterMode};
pub use network::{
    InboundAuth, Network, NetworkEventSubscribe, NetworkFqdnServer, NetworkResponseMap,
    ProxyPrecedence,
};
pub use proxy::Proxy;
pub use registrar::{CallStatus, Registrar, RegistrarAccount, RegistrationStatus};

cwmp_object! {
    /// VoiceService.{i}.SIP -- root of a SIP configuration document.
    pub struct Sip => "SIP" {
    }
    tables {
        clients: Vec<Client> => "Client", with_client;
        networks: Vec<Network> => "Network", with_network;
        proxies: Vec<Proxy> => "Proxy", with_proxy;
        registrars: Vec<Registrar> => "Registrar", with_registrar;
    }
}
