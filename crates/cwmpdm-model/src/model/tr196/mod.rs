// ── TR-196 LTE femto cell: PHY configuration ──
//
// FAPService.{i}.CellConfig.LTE.RAN.PHY. -- physical-layer parameters
// mirroring the 3GPP 36.211 / 36.331 radio resource configuration.

pub mod downlink;
pub mod frame;
pub mod uplink;

pub use downlink::{AntennaInfo, Pdsch, Prs};
pub use frame::{Mbsfn, MbsfnSfConfig, TddFrame};
pub use uplink::{DeltaPucchShift, HoppingMode, Prach, Pucch, Pusch, Srs, UlPowerControl, UlRs};

use crate::range::RangeValue;
use crate::schema::Constraint;

cwmp_object! {
    /// CellConfig.LTE.RAN.PHY -- root of a PHY configuration document.
    ///
    /// Power values are dBm; the channel offsets are dB relative to the
    /// reference signal, in units of 0.1 dB.
    pub struct Phy => "PHY" {
        psch_power_offset: i32 = 0 => "PSCHPowerOffset", ReadWrite, Constraint::range(-350, 150), with_psch_power_offset;
        ssch_power_offset: i32 = 0 => "SSCHPowerOffset", ReadWrite, Constraint::range(-350, 150), with_ssch_power_offset;
        pbch_power_offset: i32 = 0 => "PBCHPowerOffset", ReadWrite, Constraint::range(-350, 150), with_pbch_power_offset;
    }
    objects {
        antenna_info: AntennaInfo => "AntennaInfo", with_antenna_info;
        pdsch: Pdsch => "PDSCH", with_pdsch;
        srs: Srs => "SRS", with_srs;
        prach: Prach => "PRACH", with_prach;
        pucch: Pucch => "PUCCH", with_pucch;
        pusch: Pusch => "PUSCH", with_pusch;
        ul_power_control: UlPowerControl => "ULPowerControl", with_ul_power_control;
        mbsfn: Mbsfn => "MBSFN", with_mbsfn;
        prs: Prs => "PRS", with_prs;
        tdd_frame: TddFrame => "TDDFrame", with_tdd_frame;
    }
    lists {
        reference_signal_power: Vec<RangeValue> => "ReferenceSignalPower", ReadWrite, Constraint::range(-60, 50), with_reference_signal_power;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::{CwmpObject, flatten};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_child_is_a_single_object() {
        assert_eq!(Phy::children().len(), 10);
        assert!(Phy::children().iter().all(|c| !c.table));
        assert_eq!(Phy::children()[0].path_segment(), "AntennaInfo.");
    }

    #[test]
    fn lists_flatten_before_nested_objects() {
        let phy = Phy::default().with_reference_signal_power(RangeValue::preferred(-10, -30, 10));
        let values = flatten("", &phy);
        assert_eq!(values[3].path, "ReferenceSignalPower");
        assert_eq!(values[3].value, "-10(-30..10)");
        assert_eq!(values[4].path, "AntennaInfo.AntennaPortsCount");
    }

    #[test]
    fn toml_round_trip_keeps_ranges() {
        let phy = Phy::default()
            .with_reference_signal_power(RangeValue::range(-20, 0))
            .with_prach(Prach::default().with_root_sequence_index(RangeValue::preferred(5, 0, 63)));
        let text = toml::to_string(&phy).unwrap();
        let back: Phy = toml::from_str(&text).unwrap();
        assert_eq!(back, phy);
        assert_eq!(back.prach.root_sequence_index[0].preferred_value(), Some(5));
    }
}
