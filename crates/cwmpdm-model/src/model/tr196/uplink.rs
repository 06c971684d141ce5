// ── Uplink PHY: random access, control/shared channels, SRS, power control ──
//
// Parameters a self-organising cell may pick from are lists of
// `RangeValue`: each entry is a value, a `lo..hi` range, or a preferred
// value inside a range, written `v(lo..hi)`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::range::RangeValue;
use crate::schema::{Constraint, display_parameter_value};

/// 36.211 deltaPUCCH-Shift.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeltaPucchShift {
    #[default]
    Ds1,
    Ds2,
    Ds3,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum HoppingMode {
    #[default]
    InterSubFrame,
    IntraAndInterSubFrame,
}

display_parameter_value!(DeltaPucchShift, HoppingMode);

cwmp_object! {
    /// PHY.PRACH
    pub struct Prach => "PRACH" {
        high_speed_flag: bool = false => "HighSpeedFlag", ReadWrite, Constraint::NONE, with_high_speed_flag;
    }
    lists {
        root_sequence_index: Vec<RangeValue> => "RootSequenceIndex", ReadWrite, Constraint::range(0, 837), with_root_sequence_index;
        configuration_index: Vec<RangeValue> => "ConfigurationIndex", ReadWrite, Constraint::range(0, 63), with_configuration_index;
        zero_correlation_zone_config: Vec<RangeValue> => "ZeroCorrelationZoneConfig", ReadWrite, Constraint::range(0, 15), with_zero_correlation_zone_config;
        /// Resource blocks.
        freq_offset: Vec<RangeValue> => "FreqOffset", ReadWrite, Constraint::range(0, 94), with_freq_offset;
    }
}

cwmp_object! {
    /// PHY.PUCCH
    pub struct Pucch => "PUCCH" {
        delta_pucch_shift: DeltaPucchShift = DeltaPucchShift::Ds1 => "DeltaPUCCHShift", ReadWrite, Constraint::one_of(&["ds1", "ds2", "ds3"]), with_delta_pucch_shift;
    }
    lists {
        n_rb_cqi: Vec<RangeValue> => "NRBCQI", ReadWrite, Constraint::range(0, 98), with_n_rb_cqi;
        n_cs_an: Vec<RangeValue> => "NCSAN", ReadWrite, Constraint::range(0, 7), with_n_cs_an;
        n1_pucch_an: Vec<RangeValue> => "N1PUCCHAN", ReadWrite, Constraint::range(0, 2047), with_n1_pucch_an;
    }
}

cwmp_object! {
    /// PHY.PUSCH.ULRS -- uplink demodulation reference signal.
    pub struct UlRs => "ULRS" {
        group_hopping_enabled: bool = false => "GroupHoppingEnabled", ReadWrite, Constraint::NONE, with_group_hopping_enabled;
        group_assignment_pusch: u32 = 0 => "GroupAssignmentPUSCH", ReadWrite, Constraint::range(0, 29), with_group_assignment_pusch;
        sequence_hopping_enabled: bool = false => "SequenceHoppingEnabled", ReadWrite, Constraint::NONE, with_sequence_hopping_enabled;
        cyclic_shift: u32 = 0 => "CyclicShift", ReadWrite, Constraint::range(0, 7), with_cyclic_shift;
    }
}

cwmp_object! {
    /// PHY.PUSCH
    pub struct Pusch => "PUSCH" {
        /// Number of sub-bands.
        n_sb: u32 = 1 => "NSB", ReadWrite, Constraint::range(1, 4), with_n_sb;
        hopping_mode: HoppingMode = HoppingMode::InterSubFrame => "HoppingMode", ReadWrite, Constraint::one_of(&["InterSubFrame", "IntraAndInterSubFrame"]), with_hopping_mode;
        hopping_offset: u32 = 0 => "HoppingOffset", ReadWrite, Constraint::range(0, 98), with_hopping_offset;
        enable_64_qam: bool = false => "Enable64QAM", ReadWrite, Constraint::NONE, with_enable_64_qam;
    }
    objects {
        ul_rs: UlRs => "ULRS", with_ul_rs;
    }
}

cwmp_object! {
    /// PHY.SRS -- sounding reference signal.
    pub struct Srs => "SRS" {
        srs_enable: bool = false => "SRSEnable", ReadWrite, Constraint::NONE, with_srs_enable;
        srs_bandwidth_config: u32 = 0 => "SRSBandwidthConfig", ReadWrite, Constraint::range(0, 7), with_srs_bandwidth_config;
        /// TDD only.
        srs_max_up_pts: bool = false => "SRSMaxUpPTS", ReadWrite, Constraint::NONE, with_srs_max_up_pts;
        ack_nack_srs_simultaneous_transmission: bool = false => "AckNackSRSSimultaneousTransmission", ReadWrite, Constraint::NONE, with_ack_nack_srs_simultaneous_transmission;
    }
}

cwmp_object! {
    /// PHY.ULPowerControl
    ///
    /// Power values are dBm, offsets dB. `Alpha` is the path-loss
    /// compensation factor times 100.
    pub struct UlPowerControl => "ULPowerControl" {
        p0_nominal_pusch: i32 = -80 => "P0NominalPUSCH", ReadWrite, Constraint::range(-126, 24), with_p0_nominal_pusch;
        alpha: u32 = 100 => "Alpha", ReadWrite, Constraint::one_of(&["0", "40", "50", "60", "70", "80", "90", "100"]), with_alpha;
        p0_nominal_pucch: i32 = -100 => "P0NominalPUCCH", ReadWrite, Constraint::range(-127, -96), with_p0_nominal_pucch;
        delta_f_pucch_format_1: i32 = 0 => "DeltaFPUCCHFormat1", ReadWrite, Constraint::one_of(&["-2", "0", "2"]), with_delta_f_pucch_format_1;
        delta_f_pucch_format_1b: i32 = 1 => "DeltaFPUCCHFormat1b", ReadWrite, Constraint::one_of(&["1", "3", "5"]), with_delta_f_pucch_format_1b;
        delta_f_pucch_format_2: i32 = 0 => "DeltaFPUCCHFormat2", ReadWrite, Constraint::one_of(&["-2", "0", "1", "2"]), with_delta_f_pucch_format_2;
        delta_f_pucch_format_2a: i32 = 0 => "DeltaFPUCCHFormat2a", ReadWrite, Constraint::one_of(&["-2", "0", "2"]), with_delta_f_pucch_format_2a;
        delta_f_pucch_format_2b: i32 = 0 => "DeltaFPUCCHFormat2b", ReadWrite, Constraint::one_of(&["-2", "0", "2"]), with_delta_f_pucch_format_2b;
        delta_preamble_msg3: i32 = 0 => "DeltaPreambleMsg3", ReadWrite, Constraint::range(-1, 6), with_delta_preamble_msg3;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::flatten;
    use pretty_assertions::assert_eq;

    #[test]
    fn range_lists_flatten_in_string_form() {
        let prach = Prach::default()
            .with_root_sequence_index(RangeValue::preferred(22, 0, 837))
            .with_root_sequence_index(RangeValue::range(100, 120))
            .with_configuration_index(3_i64);
        let values = flatten("PRACH.", &prach);
        assert_eq!(values[1].path, "PRACH.RootSequenceIndex");
        assert_eq!(values[1].value, "22(0..837),100..120");
        assert_eq!(values[2].value, "3");
    }

    #[test]
    fn range_lists_deserialize_from_strings() {
        let json = r#"{"NRBCQI": ["2", "0..4"], "DeltaPUCCHShift": "ds2"}"#;
        let pucch: Pucch = serde_json::from_str(json).unwrap();
        assert_eq!(pucch.delta_pucch_shift, DeltaPucchShift::Ds2);
        assert_eq!(pucch.n_rb_cqi.len(), 2);
        assert!(pucch.n_rb_cqi[1].contains(4));
        assert!(pucch.n_cs_an.is_empty());
    }

    #[test]
    fn malformed_range_fails_the_whole_document() {
        let json = r#"{"FreqOffset": ["4..1"]}"#;
        assert!(serde_json::from_str::<Prach>(json).is_err());
    }

    #[test]
    fn ul_rs_is_nested_under_pusch() {
        let pusch = Pusch::default().with_ul_rs(UlRs::default().with_cyclic_shift(3_u32));
        let values = flatten("PHY.PUSCH.", &pusch);
        let shift = values
            .iter()
            .find(|v| v.path == "PHY.PUSCH.ULRS.CyclicShift")
            .unwrap();
        assert_eq!(shift.value, "3");
    }

    #[test]
    fn power_control_defaults() {
        let pc = UlPowerControl::default();
        assert_eq!(pc.p0_nominal_pusch, -80);
        assert_eq!(pc.alpha, 100);
        assert_eq!(pc.delta_f_pucch_format_1b, 1);
    }
}
