use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use xpf_dns_domain::Config;
use xpf_dns_infrastructure::dns::{
    DnsHandler, Lifecycle, PluginError, PrivateTypeRegistry, ResponseWriter, XpfPlugin,
};

/// Terminal stage: keeps the query it was handed and answers NOERROR.
#[derive(Default)]
pub struct CaptureStage {
    captured: Mutex<Option<Message>>,
}

impl CaptureStage {
    pub fn take(&self) -> Option<Message> {
        self.captured.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[async_trait]
impl DnsHandler for CaptureStage {
    fn name(&self) -> &'static str {
        "capture"
    }

    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        query: &mut Message,
    ) -> Result<ResponseCode, PluginError> {
        if let Ok(mut slot) = self.captured.lock() {
            *slot = Some(query.clone());
        }

        let mut response = query.to_response();
        response.set_response_code(ResponseCode::NoError);
        writer.write_message(response).await?;

        Ok(ResponseCode::NoError)
    }
}

/// XPF plugin wired in front of a capture stage, sharing one registry.
pub struct PluginChain {
    pub registry: Arc<PrivateTypeRegistry>,
    pub xpf: XpfPlugin,
    pub capture: Arc<CaptureStage>,
}

impl PluginChain {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(PrivateTypeRegistry::new());
        let capture = Arc::new(CaptureStage::default());
        let xpf = XpfPlugin::from_config(&config.xpf, registry.clone())?
            .with_next(capture.clone());

        debug!(rr_type = xpf.rr_type(), "Plugin chain built");
        Ok(Self {
            registry,
            xpf,
            capture,
        })
    }

    pub fn start(&self) -> anyhow::Result<()> {
        self.xpf.on_startup()?;
        info!("Plugin chain started");
        Ok(())
    }

    pub fn stop(&self) -> anyhow::Result<()> {
        self.xpf.on_shutdown()?;
        info!("Plugin chain stopped");
        Ok(())
    }
}
