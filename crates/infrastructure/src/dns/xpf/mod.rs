mod injector;
mod plugin;

pub use injector::XpfRecordInjector;
pub use plugin::{XpfPlugin, XPF_PLUGIN_NAME};
