mod plugins;

pub use plugins::PluginChain;
