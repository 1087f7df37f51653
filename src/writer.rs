/*!
 * One-shot writer for the bluetooth e-ink display
 * Created by sheepy0125 | MIT License | 2023-03-04
 */

/***** Setup *****/
// Imports
use bluer::{
    gatt::{remote::CharacteristicWriteRequest, WriteOp},
    Adapter, AdapterEvent, AdapterProperty, Address, Device,
};
use futures::{pin_mut, StreamExt};
use log::{info, warn};
use std::time::Duration;
use tokio::time::sleep;

use crate::gatt::{TARGET_DEVICE_ADDRESS, TEXT_CHARACTERISTIC_UUID};
use crate::types::{
    BluetoothError::*,
    Error::{self, *},
    POWER_POLL_DELAY,
};

/***** Helper functions *****/

/// Helper function to find if a discovered advertisement belongs to the display
///
/// `connectable` is `None` when the stack does not report the advertising type
fn advertisement_matches(address: Address, connectable: Option<bool>) -> bool {
    address == TARGET_DEVICE_ADDRESS && connectable.unwrap_or(true)
}

/***** Structs *****/

/// One-shot writer for the display's text characteristic
pub struct DeviceWriter {
    device: Device,
    payload: Vec<u8>,
}

impl DeviceWriter {
    pub fn new(device: Device, payload: Vec<u8>) -> Self {
        Self { device, payload }
    }

    /// Intialize the bluetooth adapter
    pub async fn initialize_bluetooth_adapter() -> Result<Adapter, Error> {
        let session = bluer::Session::new().await?;

        let adapter = session.default_adapter().await?;
        adapter.set_powered(true).await?;

        info!(
            "Discovering on Bluetooth adapter {} with address {}\n",
            adapter.name(),
            adapter.address().await?
        );

        Ok(adapter)
    }

    /// Scan until the display advertises
    ///
    /// The discovery subscription is held for the duration of each scan and
    /// dropped before this returns, so the scan is over before any connection
    /// attempt starts. A powered-off adapter suspends the scan until power
    /// returns.
    pub async fn discover_target_device(adapter: &mut Adapter) -> Result<Device, Error> {
        loop {
            // BlueZ tears the discovery session down with the power
            if !adapter.is_powered().await? {
                sleep(Duration::from_millis(POWER_POLL_DELAY)).await;
                continue;
            }

            info!("Scanning for the display...");
            let discover = match adapter.discover_devices().await {
                Ok(discover) => discover,
                Err(e) => {
                    warn!("Could not subscribe to discovery events: {e}");
                    sleep(Duration::from_millis(POWER_POLL_DELAY)).await;
                    continue;
                }
            };
            pin_mut!(discover);

            loop {
                let adapter_event = discover
                    .next()
                    .await
                    .ok_or(BluetoothError(MissingAdapterEvent))?;

                match adapter_event {
                    AdapterEvent::DeviceAdded(address) => {
                        info!("Discovered device {address}");
                        // BlueZ does not forward the advertisement's connectable flag
                        if !advertisement_matches(address, None) {
                            continue;
                        }
                        info!("\tFound the display!");
                        return Ok(adapter.device(address)?);
                    }
                    AdapterEvent::DeviceRemoved(address) => {
                        info!("Device {address} removed");
                    }
                    AdapterEvent::PropertyChanged(AdapterProperty::Powered(false)) => {
                        warn!("Adapter powered off, suspending the scan");
                        break;
                    }
                    AdapterEvent::PropertyChanged(property) => {
                        info!("Property change: {property:?}");
                    }
                }
            }
        }
    }

    /// Connect to the display
    pub async fn connect(&self) -> Result<(), Error> {
        if self.device.is_connected().await? {
            info!("\tAlready connected");
            return Ok(());
        }

        info!("\tConnecting...");
        self.device.connect().await?;
        info!("\tConnected");

        Ok(())
    }

    /// Write the payload to every text characteristic the display exposes,
    /// returning the number of matching characteristics
    ///
    /// The write is an unacknowledged command; a failed write is reported
    /// through the log and does not abort the enumeration
    pub async fn write_text(&self) -> Result<usize, Error> {
        info!("\tEnumerating services...");
        let mut matched = 0_usize;
        for service in self.device.services().await? {
            let service_uuid = service.uuid().await?;
            info!("\tService UUID: {}", &service_uuid);

            for characteristic in service.characteristics().await? {
                let uuid = characteristic.uuid().await?;
                info!("\tCharacteristic UUID: {}", &uuid);
                if uuid != TEXT_CHARACTERISTIC_UUID {
                    continue;
                }

                info!("\tFound the text characteristic!");
                matched += 1;
                let write_request = CharacteristicWriteRequest {
                    op_type: WriteOp::Command,
                    ..Default::default()
                };
                match characteristic.write_ext(&self.payload, &write_request).await {
                    Ok(()) => info!("\tWrote {} bytes", self.payload.len()),
                    Err(e) => warn!("\tFailed to write to the text characteristic: {e}"),
                }
            }
        }

        Ok(matched)
    }
}

/***** Tests *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_display_advertisement() {
        assert!(advertisement_matches(TARGET_DEVICE_ADDRESS, Some(true)));
    }

    #[test]
    fn matches_when_the_connectable_flag_is_unreported() {
        assert!(advertisement_matches(TARGET_DEVICE_ADDRESS, None));
    }

    #[test]
    fn ignores_a_non_connectable_advertisement() {
        assert!(!advertisement_matches(TARGET_DEVICE_ADDRESS, Some(false)));
    }

    #[test]
    fn ignores_other_addresses() {
        let other_address = Address::new([0xc0, 0x98, 0xe5, 0x00, 0xf8, 0x03]);
        assert!(!advertisement_matches(other_address, Some(true)));
        assert!(!advertisement_matches(other_address, None));
    }
}
