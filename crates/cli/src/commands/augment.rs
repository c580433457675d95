use super::parse_hex;
use crate::di::PluginChain;
use async_trait::async_trait;
use data_encoding::HEXLOWER;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use tracing::{debug, error};
use xpf_dns_domain::TransportProtocol;
use xpf_dns_infrastructure::dns::{DnsHandler, PluginError, ResponseWriter};

/// Stands in for a listener socket: fixed addresses, responses discarded.
struct StaticWriter {
    remote: SocketAddr,
    local: SocketAddr,
    protocol: TransportProtocol,
}

#[async_trait]
impl ResponseWriter for StaticWriter {
    fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    fn local_addr(&self) -> SocketAddr {
        self.local
    }

    fn protocol(&self) -> TransportProtocol {
        self.protocol
    }

    async fn write_message(&mut self, message: Message) -> Result<(), PluginError> {
        debug!(id = message.id(), rcode = ?message.response_code(), "Response discarded");
        Ok(())
    }
}

/// Runs a wire-format query through the plugin chain as if it arrived from
/// `src` on `dst`, then prints the augmented query and its private records.
pub async fn run_augment(
    chain: &PluginChain,
    src: SocketAddr,
    dst: SocketAddr,
    protocol: TransportProtocol,
    query_hex: &str,
) -> anyhow::Result<()> {
    let mut query = Message::from_vec(&parse_hex(query_hex)?)?;
    let mut writer = StaticWriter {
        remote: src,
        local: dst,
        protocol,
    };

    if let Err(e) = chain.xpf.serve_dns(&mut writer, &mut query).await {
        error!(error = %e, rcode = ?e.response_code(), "Query rejected by plugin chain");
        return Err(e.into());
    }

    let augmented = chain.capture.take().unwrap_or(query);
    println!("{}", HEXLOWER.encode(&augmented.to_vec()?));

    for (code, data) in chain.registry.decode_additionals(&augmented)? {
        let name = chain.registry.name_of(code).unwrap_or_else(|| "TYPE".into());
        println!(". 0 IN {} {}", name, data);
    }
    Ok(())
}
