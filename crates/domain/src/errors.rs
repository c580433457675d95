use thiserror::Error;

/// Failures raised while building, encoding or decoding an XPF record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XpfError {
    #[error("Malformed XPF record: {0}")]
    Format(String),

    #[error("Invalid {field} port '{value}'")]
    PortParse { field: &'static str, value: String },

    #[error("Invalid network protocol: {0}")]
    UnsupportedProtocol(String),

    #[error("Invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("Unsupported address family for XPF record")]
    UnsupportedAddressFamily,
}
