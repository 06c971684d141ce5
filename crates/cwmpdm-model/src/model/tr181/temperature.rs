// ── Temperature sensors ──
//
// Temperatures are whole degrees Celsius. -274 (below absolute zero) marks
// a reading or alarm threshold that is not available or not set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::schema::{Constraint, display_parameter_value};

/// Sentinel for "no reading" / "alarm disabled".
pub const NO_TEMPERATURE: i32 = -274;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SensorStatus {
    #[default]
    Disabled,
    Enabled,
    Error,
}

display_parameter_value!(SensorStatus);

cwmp_object! {
    /// DeviceInfo.TemperatureStatus.TemperatureSensor.{i}
    ///
    /// Writing `Reset` clears the min/max history and stamps `ResetTime`;
    /// it always reads back as false.
    pub struct TemperatureSensor => "TemperatureSensor" {
        alias: String = String::new() => "Alias", ReadWrite, Constraint::size(64), with_alias;
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        status: SensorStatus = SensorStatus::Disabled => "Status", ReadOnly, Constraint::one_of(&["Disabled", "Enabled", "Error"]), with_status;
        reset: bool = false => "Reset", ReadWrite, Constraint::NONE, with_reset;
        reset_time: Option<DateTime<Utc>> = None => "ResetTime", ReadOnly, Constraint::NONE, with_reset_time;
        name: String = String::new() => "Name", ReadOnly, Constraint::size(256), with_name;
        value: i32 = NO_TEMPERATURE => "Value", ReadOnly, Constraint::min(-274), with_value;
        last_update: Option<DateTime<Utc>> = None => "LastUpdate", ReadOnly, Constraint::NONE, with_last_update;
        min_value: i32 = NO_TEMPERATURE => "MinValue", ReadOnly, Constraint::min(-274), with_min_value;
        min_time: Option<DateTime<Utc>> = None => "MinTime", ReadOnly, Constraint::NONE, with_min_time;
        max_value: i32 = NO_TEMPERATURE => "MaxValue", ReadOnly, Constraint::min(-274), with_max_value;
        max_time: Option<DateTime<Utc>> = None => "MaxTime", ReadOnly, Constraint::NONE, with_max_time;
        low_alarm_value: i32 = NO_TEMPERATURE => "LowAlarmValue", ReadWrite, Constraint::min(-274), with_low_alarm_value;
        low_alarm_time: Option<DateTime<Utc>> = None => "LowAlarmTime", ReadOnly, Constraint::NONE, with_low_alarm_time;
        high_alarm_value: i32 = NO_TEMPERATURE => "HighAlarmValue", ReadWrite, Constraint::min(-274), with_high_alarm_value;
        high_alarm_time: Option<DateTime<Utc>> = None => "HighAlarmTime", ReadOnly, Constraint::NONE, with_high_alarm_time;
        /// Seconds; 0 lets the device pick.
        polling_interval: u32 = 0 => "PollingInterval", ReadWrite, Constraint::NONE, with_polling_interval;
    }
}

impl TemperatureSensor {
    /// Current reading, if the sensor has produced one.
    pub fn reading(&self) -> Option<i32> {
        (self.value != NO_TEMPERATURE).then_some(self.value)
    }
}

cwmp_object! {
    /// DeviceInfo.TemperatureStatus
    pub struct TemperatureStatus => "TemperatureStatus" {
    }
    tables {
        sensors: Vec<TemperatureSensor> => "TemperatureSensor", with_sensor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::flatten;
    use pretty_assertions::assert_eq;

    #[test]
    fn readings_default_to_unavailable() {
        let sensor = TemperatureSensor::default();
        assert_eq!(sensor.value, NO_TEMPERATURE);
        assert_eq!(sensor.reading(), None);
        assert_eq!(sensor.with_value(41).reading(), Some(41));
    }

    #[test]
    fn sensors_append_in_order() {
        let status = TemperatureStatus::default()
            .with_sensor(TemperatureSensor::default().with_name("CPU"))
            .with_sensor(TemperatureSensor::default().with_name("Radio"));
        let names: Vec<_> = status.sensors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["CPU", "Radio"]);

        let values = flatten("Device.DeviceInfo.TemperatureStatus.", &status);
        assert_eq!(values[0].path, "Device.DeviceInfo.TemperatureStatus.TemperatureSensorNumberOfEntries");
        assert_eq!(values[0].value, "2");
        assert!(
            values
                .iter()
                .any(|v| v.path == "Device.DeviceInfo.TemperatureStatus.TemperatureSensor.2.Name"
                    && v.value == "Radio")
        );
    }
}
