use super::injector::XpfRecordInjector;
use crate::dns::chain::{
    next_or_failure, DnsHandler, Lifecycle, PluginError, ResponseRecorder, ResponseWriter,
};
use crate::dns::registry::{PrivateRData, PrivateTypeRegistry, RegistryError};
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;
use tracing::{debug, error, info};
use xpf_dns_domain::config::XpfConfig;
use xpf_dns_domain::{XpfError, XpfRecordData, XPF_TYPE_NAME};

pub const XPF_PLUGIN_NAME: &str = "xpf";

fn decode_xpf(rdata: &[u8]) -> Result<PrivateRData, XpfError> {
    XpfRecordData::decode(rdata).map(PrivateRData::Xpf)
}

/// Chain stage that appends an XPF record describing the client connection
/// to every query before passing it on.
///
/// Call it exactly once per inbound query: a second pass over the same
/// message appends a second record.
pub struct XpfPlugin {
    injector: XpfRecordInjector,
    registry: Arc<PrivateTypeRegistry>,
    next: Option<Arc<dyn DnsHandler>>,
}

impl XpfPlugin {
    /// Plugin emitting the default record type.
    pub fn new(registry: Arc<PrivateTypeRegistry>) -> Self {
        Self {
            injector: XpfRecordInjector::default(),
            registry,
            next: None,
        }
    }

    pub fn from_config(
        config: &XpfConfig,
        registry: Arc<PrivateTypeRegistry>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            injector: XpfRecordInjector::new(config.rr_type)?,
            registry,
            next: None,
        })
    }

    pub fn with_next(mut self, next: Arc<dyn DnsHandler>) -> Self {
        self.next = Some(next);
        self
    }

    pub fn rr_type(&self) -> u16 {
        self.injector.rr_type()
    }
}

#[async_trait]
impl DnsHandler for XpfPlugin {
    fn name(&self) -> &'static str {
        XPF_PLUGIN_NAME
    }

    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        query: &mut Message,
    ) -> Result<ResponseCode, PluginError> {
        let endpoint = writer.endpoint();

        if let Err(e) = self.injector.append(&endpoint, query) {
            error!(error = %e, client = %endpoint.src_ip, "XPF append failed");
            return Err(PluginError::Augmentation);
        }

        debug!(
            rr_type = self.rr_type(),
            client = %endpoint.src_ip,
            additionals = query.additionals().len(),
            "XPF record appended"
        );

        let mut recorder = ResponseRecorder::new(writer);
        let result =
            next_or_failure(self.name(), self.next.as_deref(), &mut recorder, query).await;
        debug!(rcode = ?recorder.response_code(), "Chain returned");
        result
    }
}

impl Lifecycle for XpfPlugin {
    fn on_startup(&self) -> Result<(), PluginError> {
        self.registry
            .register(XPF_TYPE_NAME, self.rr_type(), decode_xpf)
            .map_err(|source| PluginError::Registry {
                plugin: XPF_PLUGIN_NAME,
                source,
            })?;
        info!(rr_type = self.rr_type(), "XPF record type registered");
        Ok(())
    }

    fn on_shutdown(&self) -> Result<(), PluginError> {
        self.registry.unregister(self.rr_type());
        info!(rr_type = self.rr_type(), "XPF record type removed");
        Ok(())
    }
}
