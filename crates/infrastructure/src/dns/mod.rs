pub mod chain;
pub mod registry;
pub mod xpf;

pub use chain::{
    next_or_failure, DnsHandler, Lifecycle, PluginError, ResponseRecorder, ResponseWriter,
};
pub use registry::{private_record_type, PrivateRData, PrivateTypeRegistry, RegistryError};
pub use xpf::{XpfPlugin, XpfRecordInjector, XPF_PLUGIN_NAME};
