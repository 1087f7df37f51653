/*!
 * Helper types
 * Created by sheepy0125 | MIT License | 2023-03-04
 */

/***** Setup *****/
// Imports
use bluer::Error as BluerError;
use thiserror::Error as ThisError;

// Constants
pub const POWER_POLL_DELAY: u64 = 1000; // Milliseconds

/***** Enums *****/

/// Error
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("A bluetooth error has occurred: {0}")]
    BluerError(BluerError),
    #[error("A bluetooth error has occurred: {0}")]
    BluetoothError(BluetoothError),
}

/// A bluetooth error that has not been propogated through Bluer
#[derive(Debug, ThisError)]
pub enum BluetoothError {
    #[error("Failed to get an adapter event")]
    MissingAdapterEvent,
}

impl From<BluerError> for Error {
    fn from(value: BluerError) -> Self {
        Self::BluerError(value)
    }
}
