use crate::errors::XpfError;
use std::fmt;
use std::str::FromStr;

/// Transport protocols a DNS query can arrive over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl TransportProtocol {
    /// IANA assigned protocol number.
    pub fn iana_number(&self) -> u8 {
        match self {
            TransportProtocol::Udp => 17,
            TransportProtocol::Tcp => 6,
        }
    }

    pub fn from_iana(number: u8) -> Option<Self> {
        match number {
            17 => Some(TransportProtocol::Udp),
            6 => Some(TransportProtocol::Tcp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "udp",
            TransportProtocol::Tcp => "tcp",
        }
    }
}

impl FromStr for TransportProtocol {
    type Err = XpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "udp" => Ok(TransportProtocol::Udp),
            "tcp" => Ok(TransportProtocol::Tcp),
            other => Err(XpfError::UnsupportedProtocol(other.to_string())),
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
