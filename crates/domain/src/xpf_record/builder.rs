use super::record::{XpfAddresses, XpfRecordData};
use crate::endpoint::{AddressFamily, TransportEndpoint};
use crate::errors::XpfError;
use crate::transport_protocol::TransportProtocol;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Builds the XPF record describing `endpoint`.
///
/// Addresses are normalised to the width of the declared family: an IPv4
/// endpoint needs IPv4 (or IPv4-mapped IPv6) addresses, an IPv6 endpoint
/// widens IPv4 text to its IPv4-mapped form.
pub fn build_xpf_record(endpoint: &TransportEndpoint) -> Result<XpfRecordData, XpfError> {
    let addresses = match endpoint.family {
        AddressFamily::Ipv4 => XpfAddresses::V4 {
            src: parse_ipv4("source", &endpoint.src_ip)?,
            dst: parse_ipv4("destination", &endpoint.dst_ip)?,
        },
        AddressFamily::Ipv6 => XpfAddresses::V6 {
            src: parse_ipv6("source", &endpoint.src_ip)?,
            dst: parse_ipv6("destination", &endpoint.dst_ip)?,
        },
        AddressFamily::Unspecified => return Err(XpfError::UnsupportedAddressFamily),
    };

    let src_port = parse_port("source", &endpoint.src_port)?;
    let dst_port = parse_port("destination", &endpoint.dst_port)?;
    let protocol: TransportProtocol = endpoint.protocol.parse()?;

    Ok(XpfRecordData::new(
        addresses,
        protocol.iana_number(),
        src_port,
        dst_port,
    ))
}

fn parse_ip(field: &'static str, value: &str) -> Result<IpAddr, XpfError> {
    value.parse::<IpAddr>().map_err(|_| XpfError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

fn parse_ipv4(field: &'static str, value: &str) -> Result<Ipv4Addr, XpfError> {
    match parse_ip(field, value)? {
        IpAddr::V4(v4) => Ok(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped().ok_or_else(|| XpfError::InvalidAddress {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_ipv6(field: &'static str, value: &str) -> Result<Ipv6Addr, XpfError> {
    match parse_ip(field, value)? {
        IpAddr::V4(v4) => Ok(v4.to_ipv6_mapped()),
        IpAddr::V6(v6) => Ok(v6),
    }
}

// Plain base-10 digits only; `u16::from_str` alone would accept a leading '+'.
fn parse_port(field: &'static str, value: &str) -> Result<u16, XpfError> {
    let invalid = || XpfError::PortParse {
        field,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u16>().map_err(|_| invalid())
}
