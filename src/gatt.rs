/*!
 * GATT UUIDs and address for the e-ink display
 * Created by sheepy0125 | MIT License | 2023-03-04
 */

/// Bluetooth address the display advertises with
pub const TARGET_DEVICE_ADDRESS: bluer::Address =
    bluer::Address::new([0xc0, 0x98, 0xe5, 0x00, 0xf8, 0x02]);

/// Characteristic UUID for the text line the display renders
/// Write-only
pub const TEXT_CHARACTERISTIC_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0xe528a410_ff4f_3089_d44f_7cb505aba641);

/// Characteristic UUID for the X coordinate of the text
/// Write-only - not written by this tool
#[allow(dead_code)]
pub const X_CHARACTERISTIC_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0xe528a411_ff4f_3089_d44f_7cb505aba641);

/// Characteristic UUID for the Y coordinate of the text
/// Write-only - not written by this tool
#[allow(dead_code)]
pub const Y_CHARACTERISTIC_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0xe528a412_ff4f_3089_d44f_7cb505aba641);

/// Characteristic UUID for the text scale
/// Write-only - not written by this tool
#[allow(dead_code)]
pub const SCALE_CHARACTERISTIC_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0xe528a413_ff4f_3089_d44f_7cb505aba641);

/// Characteristic UUID for the QR code payload
/// Write-only - not written by this tool
#[allow(dead_code)]
pub const QRCODE_CHARACTERISTIC_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0xe528a414_ff4f_3089_d44f_7cb505aba641);

/***** Tests *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_match_the_display_documentation() {
        // The display firmware documents its UUIDs in the dashless form
        for (uuid, documented) in [
            (TEXT_CHARACTERISTIC_UUID, "e528a410ff4f3089d44f7cb505aba641"),
            (X_CHARACTERISTIC_UUID, "e528a411ff4f3089d44f7cb505aba641"),
            (Y_CHARACTERISTIC_UUID, "e528a412ff4f3089d44f7cb505aba641"),
            (SCALE_CHARACTERISTIC_UUID, "e528a413ff4f3089d44f7cb505aba641"),
            (QRCODE_CHARACTERISTIC_UUID, "e528a414ff4f3089d44f7cb505aba641"),
        ] {
            assert_eq!(uuid, uuid::Uuid::parse_str(documented).unwrap());
        }
    }

    #[test]
    fn target_address_matches_the_display_documentation() {
        assert_eq!(
            "c0:98:e5:00:f8:02".parse::<bluer::Address>().unwrap(),
            TARGET_DEVICE_ADDRESS
        );
    }
}
