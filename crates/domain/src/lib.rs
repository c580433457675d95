//! XPF DNS Domain Layer
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod transport_protocol;
pub mod xpf_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use endpoint::{AddressFamily, TransportEndpoint};
pub use errors::XpfError;
pub use transport_protocol::TransportProtocol;
pub use xpf_record::{
    build_xpf_record, XpfAddresses, XpfRecordData, DEFAULT_XPF_RR_TYPE, XPF_TYPE_NAME,
};
