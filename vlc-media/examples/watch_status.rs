//! Print every status VLC reports until Ctrl+C
//!
//! Enable the web interface in VLC (Preferences > Interface > Main
//! interfaces > Web, with a Lua HTTP password), then run:
//!
//!   VLC_MEDIA_LOG_MODE=development cargo run -p vlc-media --example watch_status
//!
//! Pass a port as the first argument if VLC is not on 8080.

use vlc_media::{logging, AdapterConfig, ConnectionConfig, MediaPlugin, VlcAdapter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging_from_env()?;

    let mut connection = ConnectionConfig::default();
    if let Some(port) = std::env::args().nth(1) {
        connection = connection.with_port(port.parse()?);
    }

    let adapter = VlcAdapter::new(AdapterConfig::default().with_connection(connection))?;
    println!("Watching {} at {}", adapter.name(), adapter.config().connection.host);
    println!("Press Ctrl+C to stop\n");

    let mut statuses = adapter.subscribe();
    adapter.activate()?;

    loop {
        tokio::select! {
            status = statuses.recv() => match status {
                Some(status) => println!("{}", serde_json::to_string(&status)?),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    adapter.deactivate();
    println!("\n{}", adapter.stats());
    Ok(())
}
