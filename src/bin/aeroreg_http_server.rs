use clap::Parser;
use log::info;

use aeroreg::{load_node_config, RegistryHttpServer, RegistryNode};

/// Command line options for the HTTP server binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Port for the HTTP server
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Path to the node configuration file
    #[arg(long)]
    config: Option<String>,
}

/// Main entry point for the aircraft-registry HTTP server.
///
/// Loads the node configuration, populates the dataset store from the
/// configured data directory, then serves the query endpoints until the
/// process stops.
///
/// # Command-Line Arguments
///
/// * `--port <PORT>` - Port for the HTTP server (default: 8000)
/// * `--config <PATH>` - Path to the node configuration file
///
/// # Environment Variables
///
/// * `NODE_CONFIG` - Path to the node configuration file
///   (default: config/node_config.json)
/// * `RUST_LOG` - Log filter (default: info)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting aircraft registry HTTP server...");

    let Cli { port, config } = Cli::parse();

    let config = load_node_config(config.as_deref())?;
    info!("Config loaded successfully");

    let node = RegistryNode::from_config(config)?;
    info!(
        "Datasets ready: {}",
        node.store().list_datasets().join(", ")
    );

    let bind_address = format!("127.0.0.1:{}", port);
    info!("Starting HTTP server on port {}...", port);
    let http_server = RegistryHttpServer::new(node, &bind_address);

    http_server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.port, 8000);
        assert!(cli.config.is_none());
    }

    #[test]
    fn custom_port() {
        let cli = Cli::parse_from(["test", "--port", "9000"]);
        assert_eq!(cli.port, 9000);
    }
}
