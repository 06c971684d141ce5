// ── Queue-management classifiers ──
//
// QueueManagement.Classification.{i}: packet match criteria and the
// result applied to matching traffic. Every criterion has a companion
// `...Exclude` flag that inverts its sense. Integer criteria use -1 for
// "not part of the match"; marks also accept -2 ("derive automatically").

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::common::{EnableStatus, MacAddress};
use crate::schema::{Constraint, Invariant, display_parameter_value};

/// How a DHCP vendor class id is compared against the configured string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum VendorClassIdMode {
    #[default]
    Exact,
    Prefix,
    Suffix,
    Substring,
}

display_parameter_value!(VendorClassIdMode);

const ID_MODES: &[&str] = &["Exact", "Prefix", "Suffix", "Substring"];

cwmp_object! {
    /// QueueManagement.Classification.{i}
    ///
    /// Exactly one of `ClassQueue` and `ClassApp` is meant to be set, the
    /// other left at -1. The record does not enforce this.
    pub struct Classification => "Classification" {
        classification_key: u32 = 0 => "ClassificationKey", ReadOnly, Constraint::NONE, with_classification_key;
        classification_enable: bool = false => "ClassificationEnable", ReadWrite, Constraint::NONE, with_classification_enable;
        classification_status: EnableStatus = EnableStatus::Disabled => "ClassificationStatus", ReadOnly, Constraint::NONE, with_classification_status;
        /// Evaluation order; lower values are matched first.
        classification_order: u32 = 1 => "ClassificationOrder", ReadWrite, Constraint::min(1), with_classification_order;
        /// Ingress interface path, "WAN", "LAN", "Local", or empty for all.
        class_interface: String = String::new() => "ClassInterface", ReadWrite, Constraint::size(256), with_class_interface;

        // IP addresses
        dest_ip: Option<IpAddr> = None => "DestIP", ReadWrite, Constraint::NONE, with_dest_ip;
        dest_mask: Option<IpAddr> = None => "DestMask", ReadWrite, Constraint::NONE, with_dest_mask;
        dest_ip_exclude: bool = false => "DestIPExclude", ReadWrite, Constraint::NONE, with_dest_ip_exclude;
        source_ip: Option<IpAddr> = None => "SourceIP", ReadWrite, Constraint::NONE, with_source_ip;
        source_mask: Option<IpAddr> = None => "SourceMask", ReadWrite, Constraint::NONE, with_source_mask;
        source_ip_exclude: bool = false => "SourceIPExclude", ReadWrite, Constraint::NONE, with_source_ip_exclude;

        // Protocol and ports
        protocol: i32 = -1 => "Protocol", ReadWrite, Constraint::range(-1, 255), with_protocol;
        protocol_exclude: bool = false => "ProtocolExclude", ReadWrite, Constraint::NONE, with_protocol_exclude;
        dest_port: i32 = -1 => "DestPort", ReadWrite, Constraint::range(-1, 65535), with_dest_port;
        /// Upper end of the destination port range; -1 matches `DestPort` alone.
        dest_port_range_max: i32 = -1 => "DestPortRangeMax", ReadWrite, Constraint::range(-1, 65535), with_dest_port_range_max;
        dest_port_exclude: bool = false => "DestPortExclude", ReadWrite, Constraint::NONE, with_dest_port_exclude;
        source_port: i32 = -1 => "SourcePort", ReadWrite, Constraint::range(-1, 65535), with_source_port;
        source_port_range_max: i32 = -1 => "SourcePortRangeMax", ReadWrite, Constraint::range(-1, 65535), with_source_port_range_max;
        source_port_exclude: bool = false => "SourcePortExclude", ReadWrite, Constraint::NONE, with_source_port_exclude;

        // MAC addresses
        source_mac_address: Option<MacAddress> = None => "SourceMACAddress", ReadWrite, Constraint::NONE, with_source_mac_address;
        source_mac_mask: Option<MacAddress> = None => "SourceMACMask", ReadWrite, Constraint::NONE, with_source_mac_mask;
        source_mac_exclude: bool = false => "SourceMACExclude", ReadWrite, Constraint::NONE, with_source_mac_exclude;
        dest_mac_address: Option<MacAddress> = None => "DestMACAddress", ReadWrite, Constraint::NONE, with_dest_mac_address;
        dest_mac_mask: Option<MacAddress> = None => "DestMACMask", ReadWrite, Constraint::NONE, with_dest_mac_mask;
        dest_mac_exclude: bool = false => "DestMACExclude", ReadWrite, Constraint::NONE, with_dest_mac_exclude;

        // Layer 2 framing
        ethertype: i32 = -1 => "Ethertype", ReadWrite, Constraint::min(-1), with_ethertype;
        ethertype_exclude: bool = false => "EthertypeExclude", ReadWrite, Constraint::NONE, with_ethertype_exclude;
        ssap: i32 = -1 => "SSAP", ReadWrite, Constraint::min(-1), with_ssap;
        ssap_exclude: bool = false => "SSAPExclude", ReadWrite, Constraint::NONE, with_ssap_exclude;
        dsap: i32 = -1 => "DSAP", ReadWrite, Constraint::min(-1), with_dsap;
        dsap_exclude: bool = false => "DSAPExclude", ReadWrite, Constraint::NONE, with_dsap_exclude;
        llc_control: i32 = -1 => "LLCControl", ReadWrite, Constraint::min(-1), with_llc_control;
        llc_control_exclude: bool = false => "LLCControlExclude", ReadWrite, Constraint::NONE, with_llc_control_exclude;
        snap_oui: i32 = -1 => "SNAPOUI", ReadWrite, Constraint::min(-1), with_snap_oui;
        snap_oui_exclude: bool = false => "SNAPOUIExclude", ReadWrite, Constraint::NONE, with_snap_oui_exclude;

        // DHCP-derived identities
        source_vendor_class_id: String = String::new() => "SourceVendorClassID", ReadWrite, Constraint::size(255), with_source_vendor_class_id;
        source_vendor_class_id_exclude: bool = false => "SourceVendorClassIDExclude", ReadWrite, Constraint::NONE, with_source_vendor_class_id_exclude;
        source_vendor_class_id_mode: VendorClassIdMode = VendorClassIdMode::Exact => "SourceVendorClassIDMode", ReadWrite, Constraint::one_of(ID_MODES), with_source_vendor_class_id_mode;
        dest_vendor_class_id: String = String::new() => "DestVendorClassID", ReadWrite, Constraint::size(255), with_dest_vendor_class_id;
        dest_vendor_class_id_exclude: bool = false => "DestVendorClassIDExclude", ReadWrite, Constraint::NONE, with_dest_vendor_class_id_exclude;
        dest_vendor_class_id_mode: VendorClassIdMode = VendorClassIdMode::Exact => "DestVendorClassIDMode", ReadWrite, Constraint::one_of(ID_MODES), with_dest_vendor_class_id_mode;
        source_client_id: String = String::new() => "SourceClientID", ReadWrite, Constraint::size(255), with_source_client_id;
        source_client_id_exclude: bool = false => "SourceClientIDExclude", ReadWrite, Constraint::NONE, with_source_client_id_exclude;
        dest_client_id: String = String::new() => "DestClientID", ReadWrite, Constraint::size(255), with_dest_client_id;
        dest_client_id_exclude: bool = false => "DestClientIDExclude", ReadWrite, Constraint::NONE, with_dest_client_id_exclude;
        source_user_class_id: String = String::new() => "SourceUserClassID", ReadWrite, Constraint::size(255), with_source_user_class_id;
        source_user_class_id_exclude: bool = false => "SourceUserClassIDExclude", ReadWrite, Constraint::NONE, with_source_user_class_id_exclude;
        dest_user_class_id: String = String::new() => "DestUserClassID", ReadWrite, Constraint::size(255), with_dest_user_class_id;
        dest_user_class_id_exclude: bool = false => "DestUserClassIDExclude", ReadWrite, Constraint::NONE, with_dest_user_class_id_exclude;
        source_vendor_specific_info: String = String::new() => "SourceVendorSpecificInfo", ReadWrite, Constraint::size(255), with_source_vendor_specific_info;
        source_vendor_specific_info_exclude: bool = false => "SourceVendorSpecificInfoExclude", ReadWrite, Constraint::NONE, with_source_vendor_specific_info_exclude;
        source_vendor_specific_info_enterprise: u32 = 0 => "SourceVendorSpecificInfoEnterprise", ReadWrite, Constraint::NONE, with_source_vendor_specific_info_enterprise;
        source_vendor_specific_info_sub_option: i32 = 0 => "SourceVendorSpecificInfoSubOption", ReadWrite, Constraint::range(0, 255), with_source_vendor_specific_info_sub_option;
        dest_vendor_specific_info: String = String::new() => "DestVendorSpecificInfo", ReadWrite, Constraint::size(255), with_dest_vendor_specific_info;
        dest_vendor_specific_info_exclude: bool = false => "DestVendorSpecificInfoExclude", ReadWrite, Constraint::NONE, with_dest_vendor_specific_info_exclude;
        dest_vendor_specific_info_enterprise: u32 = 0 => "DestVendorSpecificInfoEnterprise", ReadWrite, Constraint::NONE, with_dest_vendor_specific_info_enterprise;
        dest_vendor_specific_info_sub_option: i32 = 0 => "DestVendorSpecificInfoSubOption", ReadWrite, Constraint::range(0, 255), with_dest_vendor_specific_info_sub_option;

        // TCP / length
        tcp_ack: bool = false => "TCPACK", ReadWrite, Constraint::NONE, with_tcp_ack;
        tcp_ack_exclude: bool = false => "TCPACKExclude", ReadWrite, Constraint::NONE, with_tcp_ack_exclude;
        ip_length_min: u32 = 0 => "IPLengthMin", ReadWrite, Constraint::NONE, with_ip_length_min;
        ip_length_max: u32 = 0 => "IPLengthMax", ReadWrite, Constraint::NONE, with_ip_length_max;
        ip_length_exclude: bool = false => "IPLengthExclude", ReadWrite, Constraint::NONE, with_ip_length_exclude;

        // Markings: checks match, marks rewrite
        dscp_check: i32 = -1 => "DSCPCheck", ReadWrite, Constraint::range(-1, 63), with_dscp_check;
        dscp_exclude: bool = false => "DSCPExclude", ReadWrite, Constraint::NONE, with_dscp_exclude;
        dscp_mark: i32 = -1 => "DSCPMark", ReadWrite, Constraint::range(-2, 63), with_dscp_mark;
        ethernet_priority_check: i32 = -1 => "EthernetPriorityCheck", ReadWrite, Constraint::range(-1, 7), with_ethernet_priority_check;
        ethernet_priority_exclude: bool = false => "EthernetPriorityExclude", ReadWrite, Constraint::NONE, with_ethernet_priority_exclude;
        ethernet_priority_mark: i32 = -1 => "EthernetPriorityMark", ReadWrite, Constraint::range(-2, 7), with_ethernet_priority_mark;
        vlan_id_check: i32 = -1 => "VLANIDCheck", ReadWrite, Constraint::range(-1, 4094), with_vlan_id_check;
        vlan_id_exclude: bool = false => "VLANIDExclude", ReadWrite, Constraint::NONE, with_vlan_id_exclude;

        // Result
        forwarding_policy: u32 = 0 => "ForwardingPolicy", ReadWrite, Constraint::NONE, with_forwarding_policy;
        traffic_class: i32 = -1 => "TrafficClass", ReadWrite, Constraint::min(-1), with_traffic_class;
        class_policer: i32 = -1 => "ClassPolicer", ReadWrite, Constraint::min(-1), with_class_policer;
        class_queue: i32 = -1 => "ClassQueue", ReadWrite, Constraint::min(-1), with_class_queue;
        class_app: i32 = -1 => "ClassApp", ReadWrite, Constraint::min(-1), with_class_app;
    }
    invariants [
        Invariant::ExactlyOne(&["ClassQueue", "ClassApp"]),
        Invariant::Unique(&["ClassificationKey"]),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::{CwmpObject, flatten};

    #[test]
    fn criteria_default_to_unused() {
        let c = Classification::default();
        assert_eq!(c.protocol, -1);
        assert_eq!(c.dest_port, -1);
        assert_eq!(c.class_queue, -1);
        assert_eq!(c.class_app, -1);
        assert_eq!(c.dest_ip, None);
        assert!(!c.dest_ip_exclude);
    }

    #[test]
    fn queue_and_app_exclusivity_is_not_enforced() {
        let c = Classification::default().with_class_queue(2).with_class_app(4);
        assert_eq!((c.class_queue, c.class_app), (2, 4));

        let json = serde_json::to_string(&c).unwrap();
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(!flatten("", &c).is_empty());

        assert!(
            Classification::invariants()
                .contains(&Invariant::ExactlyOne(&["ClassQueue", "ClassApp"]))
        );
    }

    #[test]
    fn addresses_flatten_textually() {
        let c = Classification::default()
            .with_dest_ip("192.0.2.1".parse::<IpAddr>().unwrap())
            .with_dest_mask("255.255.255.0".parse::<IpAddr>().unwrap())
            .with_source_mac_address(MacAddress::new("00-11-22-33-44-55"))
            .with_dest_ip_exclude(true);
        let values = flatten("Classification.3.", &c);
        let get = |name: &str| {
            values
                .iter()
                .find(|v| v.path == format!("Classification.3.{name}"))
                .map(|v| v.value.clone())
                .unwrap()
        };
        assert_eq!(get("DestIP"), "192.0.2.1");
        assert_eq!(get("DestMask"), "255.255.255.0");
        assert_eq!(get("DestIPExclude"), "true");
        assert_eq!(get("SourceMACAddress"), "00:11:22:33:44:55");
        assert_eq!(get("SourceIP"), "");
    }

    #[test]
    fn port_range_round_trips_through_toml() {
        let c = Classification::default()
            .with_protocol(17)
            .with_dest_port(5060)
            .with_dest_port_range_max(5070)
            .with_source_vendor_class_id_mode(VendorClassIdMode::Prefix);
        let text = toml::to_string(&c).unwrap();
        let back: Classification = toml::from_str(&text).unwrap();
        assert_eq!(back, c);
    }
}
