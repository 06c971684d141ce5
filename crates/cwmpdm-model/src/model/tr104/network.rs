// ── SIP network objects ──
//
// VoiceService.{i}.SIP.Network.{i}: the servers, timers and markings a
// group of clients shares. Timer values are milliseconds unless noted.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::common::{Origin, Status, TransportProtocol};
use crate::schema::{Constraint, Invariant, display_parameter_value};

const TRANSPORTS: &[&str] = &["UDP", "TCP", "TLS", "SCTP"];

/// Which outbound proxy address wins when several are known.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ProxyPrecedence {
    #[serde(rename = "DynamicDNS")]
    #[strum(serialize = "DynamicDNS")]
    DynamicDns,
    #[default]
    Static,
}

/// Authentication required from incoming requests.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum InboundAuth {
    #[default]
    None,
    Digest,
}

display_parameter_value!(ProxyPrecedence, InboundAuth);

cwmp_object! {
    /// SIP.Network.{i}.FQDNServer.{i} -- a statically configured server address.
    pub struct NetworkFqdnServer => "FQDNServer" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        domain: String = String::new() => "Domain", ReadWrite, Constraint::size(256), with_domain;
        weight: u32 = 0 => "Weight", ReadWrite, Constraint::range(0, 65535), with_weight;
        priority: u32 = 0 => "Priority", ReadWrite, Constraint::range(0, 65535), with_priority;
        ip_address: String = String::new() => "IPAddress", ReadWrite, Constraint::size(45), with_ip_address;
        port: u32 = 5060 => "Port", ReadWrite, Constraint::range(0, 65535), with_port;
    }
    invariants [Invariant::Unique(&["Domain", "IPAddress"])]
}

cwmp_object! {
    /// SIP.Network.{i}.EventSubscribe.{i} -- one subscribed event package.
    pub struct NetworkEventSubscribe => "EventSubscribe" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        event: String = String::new() => "Event", ReadWrite, Constraint::size(32), with_event;
        notifier: String = String::new() => "Notifier", ReadWrite, Constraint::size(256), with_notifier;
        notifier_port: u32 = 0 => "NotifierPort", ReadWrite, Constraint::range(0, 65535), with_notifier_port;
        notifier_transport: TransportProtocol = TransportProtocol::Udp => "NotifierTransport", ReadWrite, Constraint::one_of(TRANSPORTS), with_notifier_transport;
        /// Subscription refresh interval in seconds.
        expire_time: u32 = 0 => "ExpireTime", ReadWrite, Constraint::NONE, with_expire_time;
    }
    invariants [Invariant::Unique(&["Event"])]
}

cwmp_object! {
    /// SIP.Network.{i}.ResponseMap.{i} -- tone and text for one SIP response code.
    pub struct NetworkResponseMap => "ResponseMap" {
        sip_response_number: u32 = 0 => "SIPResponseNumber", ReadWrite, Constraint::range(100, 999), with_sip_response_number;
        text_message: String = String::new() => "TextMessage", ReadWrite, Constraint::size(64), with_text_message;
        /// Path of the Tone.Description instance to play.
        tone: String = String::new() => "Tone", ReadWrite, Constraint::size(256), with_tone;
    }
    invariants [Invariant::Unique(&["SIPResponseNumber"])]
}

cwmp_object! {
    /// SIP.Network.{i} -- shared server, timer and QoS settings.
    pub struct Network => "Network" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        quiescent_mode: bool = false => "QuiescentMode", ReadWrite, Constraint::NONE, with_quiescent_mode;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;

        proxy_server: String = String::new() => "ProxyServer", ReadWrite, Constraint::size(256), with_proxy_server;
        proxy_server_port: u32 = 5060 => "ProxyServerPort", ReadWrite, Constraint::range(0, 65535), with_proxy_server_port;
        proxy_server_transport: TransportProtocol = TransportProtocol::Udp => "ProxyServerTransport", ReadWrite, Constraint::one_of(TRANSPORTS), with_proxy_server_transport;
        registrar_server: String = String::new() => "RegistrarServer", ReadWrite, Constraint::size(256), with_registrar_server;
        registrar_server_port: u32 = 5060 => "RegistrarServerPort", ReadWrite, Constraint::range(0, 65535), with_registrar_server_port;
        registrar_server_transport: TransportProtocol = TransportProtocol::Udp => "RegistrarServerTransport", ReadWrite, Constraint::one_of(TRANSPORTS), with_registrar_server_transport;
        server_domain: String = String::new() => "ServerDomain", ReadWrite, Constraint::size(256), with_server_domain;

        chosen_domain: String = String::new() => "ChosenDomain", ReadOnly, Constraint::size(256), with_chosen_domain;
        chosen_ip_address: String = String::new() => "ChosenIPAddress", ReadOnly, Constraint::size(45), with_chosen_ip_address;
        chosen_port: u32 = 0 => "ChosenPort", ReadOnly, Constraint::range(0, 65535), with_chosen_port;

        user_agent_domain: String = String::new() => "UserAgentDomain", ReadWrite, Constraint::size(256), with_user_agent_domain;
        user_agent_port: u32 = 0 => "UserAgentPort", ReadWrite, Constraint::range(0, 65535), with_user_agent_port;
        user_agent_transport: TransportProtocol = TransportProtocol::Udp => "UserAgentTransport", ReadWrite, Constraint::one_of(TRANSPORTS), with_user_agent_transport;

        outbound_proxy: String = String::new() => "OutboundProxy", ReadWrite, Constraint::size(256), with_outbound_proxy;
        outbound_proxy_resolved_address: String = String::new() => "OutboundProxyResolvedAddress", ReadOnly, Constraint::size(45), with_outbound_proxy_resolved_address;
        outbound_proxy_precedence: ProxyPrecedence = ProxyPrecedence::Static => "OutboundProxyPrecedence", ReadWrite, Constraint::one_of(&["DynamicDNS", "Static"]), with_outbound_proxy_precedence;
        outbound_proxy_port: u32 = 5060 => "OutboundProxyPort", ReadWrite, Constraint::range(0, 65535), with_outbound_proxy_port;

        stun_enable: bool = false => "STUNEnable", ReadWrite, Constraint::NONE, with_stun_enable;
        stun_server: String = String::new() => "STUNServer", ReadWrite, Constraint::size(256), with_stun_server;
        non_voice_bandwidth_reserved_upstream: u32 = 0 => "NonVoiceBandwidthReservedUpstream", ReadWrite, Constraint::NONE, with_non_voice_bandwidth_reserved_upstream;
        non_voice_bandwidth_reserved_downstream: u32 = 0 => "NonVoiceBandwidthReservedDownstream", ReadWrite, Constraint::NONE, with_non_voice_bandwidth_reserved_downstream;
        organization: String = String::new() => "Organization", ReadWrite, Constraint::size(256), with_organization;

        /// Seconds between re-registrations.
        registration_period: u32 = 3600 => "RegistrationPeriod", ReadWrite, Constraint::min(1), with_registration_period;
        realm: String = String::new() => "Realm", ReadWrite, Constraint::size(256), with_realm;
        /// Seconds, sent in the Expires header of REGISTER.
        register_expires: u32 = 3600 => "RegisterExpires", ReadWrite, Constraint::min(1), with_register_expires;
        /// Seconds to wait before retrying a failed registration.
        register_retry_interval: u32 = 30 => "RegisterRetryInterval", ReadWrite, Constraint::min(1), with_register_retry_interval;

        timer_t1: u32 = 500 => "TimerT1", ReadWrite, Constraint::min(1), with_timer_t1;
        timer_t2: u32 = 4000 => "TimerT2", ReadWrite, Constraint::min(1), with_timer_t2;
        timer_t4: u32 = 5000 => "TimerT4", ReadWrite, Constraint::min(1), with_timer_t4;
        timer_a: u32 = 500 => "TimerA", ReadWrite, Constraint::min(1), with_timer_a;
        timer_b: u32 = 32000 => "TimerB", ReadWrite, Constraint::min(1), with_timer_b;
        timer_c: u32 = 180_000 => "TimerC", ReadWrite, Constraint::min(1), with_timer_c;
        timer_d: u32 = 32000 => "TimerD", ReadWrite, Constraint::min(0), with_timer_d;
        timer_e: u32 = 500 => "TimerE", ReadWrite, Constraint::min(1), with_timer_e;
        timer_f: u32 = 32000 => "TimerF", ReadWrite, Constraint::min(1), with_timer_f;
        timer_g: u32 = 500 => "TimerG", ReadWrite, Constraint::min(1), with_timer_g;
        timer_h: u32 = 32000 => "TimerH", ReadWrite, Constraint::min(1), with_timer_h;
        timer_i: u32 = 5000 => "TimerI", ReadWrite, Constraint::min(0), with_timer_i;
        timer_j: u32 = 32000 => "TimerJ", ReadWrite, Constraint::min(0), with_timer_j;
        timer_k: u32 = 5000 => "TimerK", ReadWrite, Constraint::min(0), with_timer_k;
        /// Seconds, Expires header of INVITE.
        invite_expires: u32 = 180 => "InviteExpires", ReadWrite, Constraint::min(1), with_invite_expires;
        re_invite_expires: u32 = 180 => "ReInviteExpires", ReadWrite, Constraint::min(1), with_re_invite_expires;

        inbound_auth: InboundAuth = InboundAuth::None => "InboundAuth", ReadWrite, Constraint::one_of(&["None", "Digest"]), with_inbound_auth;
        inbound_auth_username: String = String::new() => "InboundAuthUsername", ReadWrite, Constraint::size(256), with_inbound_auth_username;
        inbound_auth_password: String = String::new() => "InboundAuthPassword", Secret, Constraint::size(256), with_inbound_auth_password;

        dscp_mark: u32 = 0 => "DSCPMark", ReadWrite, Constraint::range(0, 63), with_dscp_mark;
        /// -1 leaves the frame untagged.
        vlan_id_mark: i32 = -1 => "VLANIDMark", ReadWrite, Constraint::range(-1, 4094), with_vlan_id_mark;
        ethernet_priority_mark: i32 = -1 => "EthernetPriorityMark", ReadWrite, Constraint::range(-1, 7), with_ethernet_priority_mark;

        max_sessions: Option<u32> = None => "MaxSessions", ReadWrite, Constraint::min(0), with_max_sessions;
        /// Path of the VoIPProfile instance applied to this network.
        voip_profile: String = String::new() => "VoIPProfile", ReadWrite, Constraint::size(256), with_voip_profile;
    }
    lists {
        codec_list: Vec<String> => "CodecList", ReadWrite, Constraint::size(256), with_codec;
    }
    tables {
        fqdn_servers: Vec<NetworkFqdnServer> => "FQDNServer", with_fqdn_server;
        event_subscribes: Vec<NetworkEventSubscribe> => "EventSubscribe", with_event_subscribe;
        response_maps: Vec<NetworkResponseMap> => "ResponseMap", with_response_map;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::{CwmpObject, flatten};

    #[test]
    fn timer_defaults_follow_rfc3261() {
        let net = Network::default();
        assert_eq!(net.timer_t1, 500);
        assert_eq!(net.timer_b, 64 * net.timer_t1);
        assert_eq!(net.proxy_server_port, 5060);
        assert_eq!(net.vlan_id_mark, -1);
    }

    #[test]
    fn codec_list_flattens_comma_separated() {
        let net = Network::default().with_codec("G.711ALaw").with_codec("G.722");
        let values = flatten("", &net);
        let codecs = values.iter().find(|v| v.path == "CodecList").unwrap();
        assert_eq!(codecs.value, "G.711ALaw,G.722");
    }

    #[test]
    fn tables_flatten_after_scalars() {
        let net = Network::default()
            .with_fqdn_server(NetworkFqdnServer::default().with_domain("sip.example.net"))
            .with_response_map(NetworkResponseMap::default().with_sip_response_number(486_u32));
        let paths: Vec<String> = flatten("Network.1.", &net)
            .into_iter()
            .map(|v| v.path)
            .collect();

        let voip = paths.iter().position(|p| p == "Network.1.VoIPProfile").unwrap();
        let fqdn = paths
            .iter()
            .position(|p| p == "Network.1.FQDNServer.1.Domain")
            .unwrap();
        assert!(voip < fqdn);
        assert!(paths.contains(&"Network.1.ResponseMap.1.SIPResponseNumber".to_owned()));
        assert!(paths.contains(&"Network.1.EventSubscribeNumberOfEntries".to_owned()));
    }

    #[test]
    fn response_map_declares_unique_code() {
        assert_eq!(
            NetworkResponseMap::invariants(),
            &[Invariant::Unique(&["SIPResponseNumber"])]
        );
    }

    #[test]
    fn yaml_round_trip() {
        let net = Network::default()
            .with_enable(true)
            .with_proxy_server("proxy.example.net")
            .with_outbound_proxy_precedence(ProxyPrecedence::DynamicDns)
            .with_inbound_auth(InboundAuth::Digest);
        let yaml = serde_yaml::to_string(&net).unwrap();
        assert!(yaml.contains("OutboundProxyPrecedence: DynamicDNS"));
        let back: Network = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, net);
    }
}
