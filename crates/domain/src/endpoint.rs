use crate::transport_protocol::TransportProtocol;
use std::net::SocketAddr;

/// Address family of the connection a query arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    /// The transport could not report a family (e.g. a detached context).
    Unspecified,
}

impl AddressFamily {
    pub fn of(addr: &SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(_) => AddressFamily::Ipv4,
            SocketAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

/// Transport identity of one DNS exchange, in the textual form the request
/// layer hands out. Values are validated when the XPF record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportEndpoint {
    pub src_ip: String,
    pub src_port: String,
    pub dst_ip: String,
    pub dst_port: String,
    pub family: AddressFamily,
    pub protocol: String,
}

impl TransportEndpoint {
    pub fn new(
        src_ip: impl Into<String>,
        src_port: impl Into<String>,
        dst_ip: impl Into<String>,
        dst_port: impl Into<String>,
        family: AddressFamily,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            src_ip: src_ip.into(),
            src_port: src_port.into(),
            dst_ip: dst_ip.into(),
            dst_port: dst_port.into(),
            family,
            protocol: protocol.into(),
        }
    }

    /// Derives the endpoint from the peer (`remote`) and listening (`local`)
    /// socket addresses. The family follows the peer address.
    pub fn from_socket_addrs(
        remote: SocketAddr,
        local: SocketAddr,
        protocol: TransportProtocol,
    ) -> Self {
        Self {
            src_ip: remote.ip().to_string(),
            src_port: remote.port().to_string(),
            dst_ip: local.ip().to_string(),
            dst_port: local.port().to_string(),
            family: AddressFamily::of(&remote),
            protocol: protocol.as_str().to_string(),
        }
    }
}
