/*!
 * Send a line of text to the bluetooth e-ink display
 * Created by sheepy0125 | MIT License | 2023-03-04
 */

/***** Setup *****/
// Imports
use clap::Parser;
use log::{error, info, warn};

mod gatt;
mod types;
mod writer;
use types::Error;
use writer::DeviceWriter;

/***** Command line *****/

/// Write text to the e-ink display's text characteristic
#[derive(Parser)]
#[command(name = "text-to-bluetooth")]
#[command(about = "Write text to the bluetooth e-ink display")]
struct Cli {
    /// Text for the display to render
    text: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();

    let mut adapter = DeviceWriter::initialize_bluetooth_adapter().await?;
    let device = DeviceWriter::discover_target_device(&mut adapter).await?;
    let writer = DeviceWriter::new(device, cli.text.into_bytes());

    match writer.connect().await {
        Ok(()) => match writer.write_text().await {
            Ok(0) => warn!("The display does not expose the text characteristic"),
            Ok(_) => info!("Sent the text to the display"),
            Err(e) => error!("Failed to enumerate the display's characteristics: {e}"),
        },
        Err(e) => error!("Peripheral connection error: {e}"),
    }

    Ok(())
}
