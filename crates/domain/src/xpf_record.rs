mod builder;
mod record;

pub use builder::build_xpf_record;
pub use record::{XpfAddresses, XpfRecordData, XPF_HEADER_LEN};

/// Mnemonic the record type is registered under.
pub const XPF_TYPE_NAME: &str = "XPF";

/// Record type used when none is configured. Sits in the private-use range
/// and matches the code Wireshark dissects as XPF.
pub const DEFAULT_XPF_RR_TYPE: u16 = 65422;
