// ── TR-181 device information ──
//
// Device.DeviceInfo. -- identification, resource status and the
// descriptive tables hanging off it.

pub mod files;
pub mod location;
pub mod proxier;
pub mod resources;
pub mod temperature;

pub use files::{SupportedDataModel, VendorConfigFile};
pub use location::{ExternalProtocol, Location, LocationSource};
pub use proxier::{ProxierInfo, ProxyProtocol};
pub use resources::{Architecture, MemoryStatus, NetworkProperties, Processor, TcpImplementation};
pub use temperature::{NO_TEMPERATURE, SensorStatus, TemperatureSensor, TemperatureStatus};

use chrono::{DateTime, Utc};

use crate::schema::Constraint;

cwmp_object! {
    /// Device.DeviceInfo -- root of a device-information document.
    pub struct DeviceInfo => "DeviceInfo" {
        manufacturer: String = String::new() => "Manufacturer", ReadOnly, Constraint::size(64), with_manufacturer;
        manufacturer_oui: String = String::new() => "ManufacturerOUI", ReadOnly, Constraint::pattern("[0-9A-F]{6}"), with_manufacturer_oui;
        model_name: String = String::new() => "ModelName", ReadOnly, Constraint::size(64), with_model_name;
        model_number: String = String::new() => "ModelNumber", ReadOnly, Constraint::size(64), with_model_number;
        description: String = String::new() => "Description", ReadOnly, Constraint::size(256), with_description;
        product_class: String = String::new() => "ProductClass", ReadOnly, Constraint::size(64), with_product_class;
        serial_number: String = String::new() => "SerialNumber", ReadOnly, Constraint::size(64), with_serial_number;
        hardware_version: String = String::new() => "HardwareVersion", ReadOnly, Constraint::size(64), with_hardware_version;
        software_version: String = String::new() => "SoftwareVersion", ReadOnly, Constraint::size(64), with_software_version;
        additional_hardware_version: String = String::new() => "AdditionalHardwareVersion", ReadOnly, Constraint::size(64), with_additional_hardware_version;
        additional_software_version: String = String::new() => "AdditionalSoftwareVersion", ReadOnly, Constraint::size(64), with_additional_software_version;
        provisioning_code: String = String::new() => "ProvisioningCode", ReadWrite, Constraint::size(64), with_provisioning_code;
        /// Seconds since boot.
        up_time: u32 = 0 => "UpTime", ReadOnly, Constraint::NONE, with_up_time;
        first_use_date: Option<DateTime<Utc>> = None => "FirstUseDate", ReadOnly, Constraint::NONE, with_first_use_date;
    }
    objects {
        memory_status: MemoryStatus => "MemoryStatus", with_memory_status;
        network_properties: NetworkProperties => "NetworkProperties", with_network_properties;
        temperature_status: TemperatureStatus => "TemperatureStatus", with_temperature_status;
    }
    tables {
        vendor_config_files: Vec<VendorConfigFile> => "VendorConfigFile", with_vendor_config_file;
        supported_data_models: Vec<SupportedDataModel> => "SupportedDataModel", with_supported_data_model;
        processors: Vec<Processor> => "Processor", with_processor;
        proxier_infos: Vec<ProxierInfo> => "ProxierInfo", with_proxier_info;
        locations: Vec<Location> => "Location", with_location;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::{CwmpObject, flatten};
    use pretty_assertions::assert_eq;

    #[test]
    fn single_objects_flatten_before_tables() {
        let info = DeviceInfo::default()
            .with_memory_status(MemoryStatus::default().with_total(65536_u32))
            .with_processor(Processor::default().with_architecture(Architecture::Mipsel));
        let paths: Vec<String> = flatten("Device.DeviceInfo.", &info)
            .into_iter()
            .map(|v| v.path)
            .collect();
        let mem = paths
            .iter()
            .position(|p| p == "Device.DeviceInfo.MemoryStatus.Total")
            .unwrap();
        let cpu = paths
            .iter()
            .position(|p| p == "Device.DeviceInfo.Processor.1.Architecture")
            .unwrap();
        assert!(mem < cpu);
        assert!(paths.contains(&"Device.DeviceInfo.ProcessorNumberOfEntries".to_owned()));
    }

    #[test]
    fn children_mix_objects_and_tables() {
        let kinds: Vec<(&str, bool)> = DeviceInfo::children()
            .iter()
            .map(|c| (c.name, c.table))
            .collect();
        assert_eq!(
            kinds,
            [
                ("MemoryStatus", false),
                ("NetworkProperties", false),
                ("TemperatureStatus", false),
                ("VendorConfigFile", true),
                ("SupportedDataModel", true),
                ("Processor", true),
                ("ProxierInfo", true),
                ("Location", true),
            ]
        );
    }

    #[test]
    fn yaml_document_fills_missing_fields_with_defaults() {
        let yaml = "Manufacturer: Acme\nUpTime: 3600\nMemoryStatus:\n  Total: 2048\n";
        let info: DeviceInfo = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(info.manufacturer, "Acme");
        assert_eq!(info.up_time, 3600);
        assert_eq!(info.memory_status.total, 2048);
        assert_eq!(info.memory_status.free, 0);
        assert!(info.locations.is_empty());
    }
}
