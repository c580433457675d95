use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing::{error, info};
use xpf_dns_domain::{CliOverrides, TransportProtocol};

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "xpf-dns")]
#[command(version)]
#[command(about = "XPF DNS - carry the original client's transport identity in DNS queries")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Record type code used for XPF records
    #[arg(short = 't', long)]
    rr_type: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the XPF record for a connection and print it
    Build {
        /// Client address, IP:PORT
        #[arg(long)]
        src: SocketAddr,

        /// Server address the query arrived on, IP:PORT
        #[arg(long)]
        dst: SocketAddr,

        /// Transport protocol name
        #[arg(long, default_value = "udp")]
        proto: String,
    },

    /// Decode hex-encoded XPF record data
    Decode {
        /// RDATA bytes as hex
        hex: String,
    },

    /// Append an XPF record to a hex-encoded DNS query
    Augment {
        /// Client address, IP:PORT
        #[arg(long)]
        src: SocketAddr,

        /// Server address the query arrived on, IP:PORT
        #[arg(long)]
        dst: SocketAddr,

        /// Transport protocol (udp or tcp)
        #[arg(long, default_value = "udp")]
        proto: TransportProtocol,

        /// Wire-format query as hex
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        rr_type: cli.rr_type,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting XPF DNS v{}", env!("CARGO_PKG_VERSION"));

    let chain = di::PluginChain::new(&config)?;
    chain.start()?;

    let result = match &cli.command {
        Command::Build { src, dst, proto } => commands::run_build(*src, *dst, proto),
        Command::Decode { hex } => {
            commands::run_decode(&chain.registry, chain.xpf.rr_type(), hex)
        }
        Command::Augment {
            src,
            dst,
            proto,
            query,
        } => commands::run_augment(&chain, *src, *dst, *proto, query).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }

    chain.stop()?;
    info!("Shutdown complete");
    result
}
