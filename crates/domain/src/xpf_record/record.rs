use crate::errors::XpfError;
use crate::transport_protocol::TransportProtocol;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Fixed part of the RDATA: version, protocol and both ports.
pub const XPF_HEADER_LEN: usize = 6;

const IPV4_LEN: usize = 4;
const IPV6_LEN: usize = 16;

/// Source and destination addresses of an XPF record. Both sides always
/// share the IP version, so the address width follows from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XpfAddresses {
    V4 { src: Ipv4Addr, dst: Ipv4Addr },
    V6 { src: Ipv6Addr, dst: Ipv6Addr },
}

impl XpfAddresses {
    pub fn ip_version(&self) -> u8 {
        match self {
            XpfAddresses::V4 { .. } => 4,
            XpfAddresses::V6 { .. } => 6,
        }
    }

    fn address_len(&self) -> usize {
        match self {
            XpfAddresses::V4 { .. } => IPV4_LEN,
            XpfAddresses::V6 { .. } => IPV6_LEN,
        }
    }
}

/// RDATA of an XPF record.
///
/// Wire layout, network byte order:
///
/// ```text
/// +---------+----------+----------+----------+---------+---------+
/// | version | protocol | src port | dst port | src adr | dst adr |
/// |   u8    |    u8    |   u16    |   u16    | 4 / 16  | 4 / 16  |
/// +---------+----------+----------+----------+---------+---------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XpfRecordData {
    addresses: XpfAddresses,
    protocol: u8,
    src_port: u16,
    dst_port: u16,
}

impl XpfRecordData {
    pub fn new(addresses: XpfAddresses, protocol: u8, src_port: u16, dst_port: u16) -> Self {
        Self {
            addresses,
            protocol,
            src_port,
            dst_port,
        }
    }

    pub fn ip_version(&self) -> u8 {
        self.addresses.ip_version()
    }

    pub fn addresses(&self) -> &XpfAddresses {
        &self.addresses
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Named transport for the protocol number, if it is one queries use.
    pub fn transport(&self) -> Option<TransportProtocol> {
        TransportProtocol::from_iana(self.protocol)
    }

    pub fn src_port(&self) -> u16 {
        self.src_port
    }

    pub fn dst_port(&self) -> u16 {
        self.dst_port
    }

    /// Length of the encoded RDATA: 14 bytes for IPv4, 38 for IPv6.
    pub fn encoded_len(&self) -> usize {
        XPF_HEADER_LEN + 2 * self.addresses.address_len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.push(self.ip_version());
        buf.push(self.protocol);
        buf.extend_from_slice(&self.src_port.to_be_bytes());
        buf.extend_from_slice(&self.dst_port.to_be_bytes());
        match &self.addresses {
            XpfAddresses::V4 { src, dst } => {
                buf.extend_from_slice(&src.octets());
                buf.extend_from_slice(&dst.octets());
            }
            XpfAddresses::V6 { src, dst } => {
                buf.extend_from_slice(&src.octets());
                buf.extend_from_slice(&dst.octets());
            }
        }
        buf
    }

    /// Parses RDATA bytes. The address section must be exactly two
    /// addresses wide for the declared version.
    pub fn decode(rdata: &[u8]) -> Result<Self, XpfError> {
        if rdata.len() < XPF_HEADER_LEN {
            return Err(XpfError::Format(format!(
                "record data too short: {} bytes, need at least {}",
                rdata.len(),
                XPF_HEADER_LEN
            )));
        }

        let version = rdata[0];
        let protocol = rdata[1];
        let src_port = u16::from_be_bytes([rdata[2], rdata[3]]);
        let dst_port = u16::from_be_bytes([rdata[4], rdata[5]]);
        let addrs = &rdata[XPF_HEADER_LEN..];

        let addr_len = match version {
            4 => IPV4_LEN,
            6 => IPV6_LEN,
            other => {
                return Err(XpfError::Format(format!("unknown IP version {}", other)));
            }
        };

        if addrs.len() != 2 * addr_len {
            return Err(XpfError::Format(format!(
                "IPv{} record carries {} address bytes, expected {}",
                version,
                addrs.len(),
                2 * addr_len
            )));
        }

        let (src, dst) = addrs.split_at(addr_len);
        let addresses = if version == 4 {
            XpfAddresses::V4 {
                src: Ipv4Addr::from(to_array::<IPV4_LEN>(src)),
                dst: Ipv4Addr::from(to_array::<IPV4_LEN>(dst)),
            }
        } else {
            XpfAddresses::V6 {
                src: Ipv6Addr::from(to_array::<IPV6_LEN>(src)),
                dst: Ipv6Addr::from(to_array::<IPV6_LEN>(dst)),
            }
        };

        Ok(Self::new(addresses, protocol, src_port, dst_port))
    }
}

// Caller guarantees `bytes.len() == N`.
fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

impl fmt::Display for XpfRecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ",
            self.ip_version(),
            self.protocol,
            self.src_port,
            self.dst_port
        )?;
        match &self.addresses {
            XpfAddresses::V4 { src, dst } => write!(f, "{} {}", src, dst),
            XpfAddresses::V6 { src, dst } => write!(f, "{} {}", src, dst),
        }
    }
}
