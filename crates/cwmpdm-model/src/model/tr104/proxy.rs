// ── SIP proxy objects ──

use crate::model::common::{Origin, Status};
use crate::schema::{Constraint, Invariant};

cwmp_object! {
    /// SIP.Proxy.{i} -- a SIP proxy hosted on the device.
    ///
    /// `ProxyIPAddress` + `ProxyPort` identify the entry; two entries with
    /// the same pair are a configuration error the management agent reports.
    pub struct Proxy => "Proxy" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        proxy_ip_address: String = String::new() => "ProxyIPAddress", ReadWrite, Constraint::size(45), with_proxy_ip_address;
        proxy_port: u32 = 5060 => "ProxyPort", ReadWrite, Constraint::range(0, 65535), with_proxy_port;
        contact_uri: String = String::new() => "ContactURI", ReadWrite, Constraint::size(256), with_contact_uri;
        voip_profile: String = String::new() => "VoIPProfile", ReadWrite, Constraint::size(256), with_voip_profile;
    }
    invariants [Invariant::Unique(&["ProxyIPAddress", "ProxyPort"])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CwmpObject;

    #[test]
    fn declares_address_port_uniqueness() {
        assert_eq!(
            Proxy::invariants(),
            &[Invariant::Unique(&["ProxyIPAddress", "ProxyPort"])]
        );
    }

    #[test]
    fn duplicate_keys_are_not_rejected() {
        // Uniqueness is documentation for the management agent.
        let a = Proxy::default().with_proxy_ip_address("192.0.2.10");
        let b = a.clone();
        let table = [a, b];
        assert_eq!(table[0].proxy_ip_address, table[1].proxy_ip_address);
        assert_eq!(table[0].proxy_port, table[1].proxy_port);
    }
}
