// ── Queue-management policers ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::common::EnableStatus;
use crate::schema::{Constraint, Invariant, display_parameter_value};

/// Metering algorithm (RFC 2697 / RFC 2698 / simple token bucket).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum MeterType {
    #[default]
    SimpleTokenBucket,
    SingleRateThreeColor,
    TwoRateThreeColor,
}

display_parameter_value!(MeterType);

const METER_TYPES: &[&str] = &["SimpleTokenBucket", "SingleRateThreeColor", "TwoRateThreeColor"];

cwmp_object! {
    /// QueueManagement.Policer.{i}
    ///
    /// Actions are "Null", "Drop", or a DSCP / Ethernet priority value
    /// written as `:<n>` to remark. Counters are read-only.
    pub struct Policer => "Policer" {
        policer_key: u32 = 0 => "PolicerKey", ReadOnly, Constraint::NONE, with_policer_key;
        policer_enable: bool = false => "PolicerEnable", ReadWrite, Constraint::NONE, with_policer_enable;
        policer_status: EnableStatus = EnableStatus::Disabled => "PolicerStatus", ReadOnly, Constraint::NONE, with_policer_status;
        /// Bits per second.
        committed_rate: u32 = 0 => "CommittedRate", ReadWrite, Constraint::NONE, with_committed_rate;
        /// Bytes.
        committed_burst_size: u32 = 0 => "CommittedBurstSize", ReadWrite, Constraint::NONE, with_committed_burst_size;
        excess_burst_size: u32 = 0 => "ExcessBurstSize", ReadWrite, Constraint::NONE, with_excess_burst_size;
        peak_rate: u32 = 0 => "PeakRate", ReadWrite, Constraint::NONE, with_peak_rate;
        peak_burst_size: u32 = 0 => "PeakBurstSize", ReadWrite, Constraint::NONE, with_peak_burst_size;
        meter_type: MeterType = MeterType::SimpleTokenBucket => "MeterType", ReadWrite, Constraint::one_of(METER_TYPES), with_meter_type;
        conforming_action: String = String::from("Null") => "ConformingAction", ReadWrite, Constraint::NONE, with_conforming_action;
        partial_conforming_action: String = String::from("Drop") => "PartialConformingAction", ReadWrite, Constraint::NONE, with_partial_conforming_action;
        non_conforming_action: String = String::from("Drop") => "NonConformingAction", ReadWrite, Constraint::NONE, with_non_conforming_action;
        total_counted_packets: u32 = 0 => "TotalCountedPackets", ReadOnly, Constraint::NONE, with_total_counted_packets;
        total_counted_bytes: u32 = 0 => "TotalCountedBytes", ReadOnly, Constraint::NONE, with_total_counted_bytes;
        conforming_counted_packets: u32 = 0 => "ConformingCountedPackets", ReadOnly, Constraint::NONE, with_conforming_counted_packets;
        conforming_counted_bytes: u32 = 0 => "ConformingCountedBytes", ReadOnly, Constraint::NONE, with_conforming_counted_bytes;
        partially_conforming_counted_packets: u32 = 0 => "PartiallyConformingCountedPackets", ReadOnly, Constraint::NONE, with_partially_conforming_counted_packets;
        partially_conforming_counted_bytes: u32 = 0 => "PartiallyConformingCountedBytes", ReadOnly, Constraint::NONE, with_partially_conforming_counted_bytes;
        non_conforming_counted_packets: u32 = 0 => "NonConformingCountedPackets", ReadOnly, Constraint::NONE, with_non_conforming_counted_packets;
        non_conforming_counted_bytes: u32 = 0 => "NonConformingCountedBytes", ReadOnly, Constraint::NONE, with_non_conforming_counted_bytes;
    }
    lists {
        possible_meter_types: Vec<MeterType> => "PossibleMeterTypes", ReadOnly, Constraint::one_of(METER_TYPES), with_possible_meter_type;
    }
    invariants [Invariant::Unique(&["PolicerKey"])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::flatten;

    #[test]
    fn actions_default_to_null_and_drop() {
        let p = Policer::default();
        assert_eq!(p.conforming_action, "Null");
        assert_eq!(p.non_conforming_action, "Drop");
    }

    #[test]
    fn possible_meter_types_flatten_as_list() {
        let p = Policer::default()
            .with_possible_meter_type(MeterType::SimpleTokenBucket)
            .with_possible_meter_type(MeterType::TwoRateThreeColor);
        let list = flatten("", &p)
            .into_iter()
            .find(|v| v.path == "PossibleMeterTypes")
            .map(|v| v.value);
        assert_eq!(
            list.as_deref(),
            Some("SimpleTokenBucket,TwoRateThreeColor")
        );
    }
}
