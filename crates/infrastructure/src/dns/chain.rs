//! Handler chain
//!
//! A query travels through a sequence of [`DnsHandler`]s. Each stage may
//! inspect or mutate the query and then hand it to the next one, returning
//! the response code of whichever stage finally answered.

use super::registry::RegistryError;
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{debug, warn};
use xpf_dns_domain::{TransportEndpoint, TransportProtocol};

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("failed to append the XPF record to the DNS request")]
    Augmentation,

    #[error("plugin/{0}: no next plugin found")]
    NoNextHandler(&'static str),

    #[error("plugin/{plugin}: {source}")]
    Registry {
        plugin: &'static str,
        #[source]
        source: RegistryError,
    },
}

impl PluginError {
    /// Response code a server should answer with when the chain fails.
    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::ServFail
    }
}

/// Connection a query arrived on, plus the sink its response goes to.
#[async_trait]
pub trait ResponseWriter: Send {
    /// Address of the client that sent the query.
    fn remote_addr(&self) -> SocketAddr;

    /// Address the query was received on.
    fn local_addr(&self) -> SocketAddr;

    fn protocol(&self) -> TransportProtocol;

    async fn write_message(&mut self, message: Message) -> Result<(), PluginError>;

    /// Transport identity of this exchange.
    fn endpoint(&self) -> TransportEndpoint {
        TransportEndpoint::from_socket_addrs(self.remote_addr(), self.local_addr(), self.protocol())
    }
}

/// One stage of the handler chain.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        query: &mut Message,
    ) -> Result<ResponseCode, PluginError>;
}

/// Startup and shutdown hooks, each called once by the host.
pub trait Lifecycle {
    fn on_startup(&self) -> Result<(), PluginError>;

    fn on_shutdown(&self) -> Result<(), PluginError>;
}

/// Calls `next` when present, otherwise fails with
/// [`PluginError::NoNextHandler`] naming the calling plugin.
pub async fn next_or_failure(
    name: &'static str,
    next: Option<&dyn DnsHandler>,
    writer: &mut dyn ResponseWriter,
    query: &mut Message,
) -> Result<ResponseCode, PluginError> {
    match next {
        Some(next) => {
            debug!(plugin = name, next = next.name(), "Passing query down the chain");
            next.serve_dns(writer, query).await
        }
        None => {
            warn!(plugin = name, "No next plugin configured");
            Err(PluginError::NoNextHandler(name))
        }
    }
}

/// Writer wrapper that remembers what was written through it.
pub struct ResponseRecorder<'a> {
    inner: &'a mut dyn ResponseWriter,
    response_code: Option<ResponseCode>,
    message: Option<Message>,
}

impl<'a> ResponseRecorder<'a> {
    pub fn new(inner: &'a mut dyn ResponseWriter) -> Self {
        Self {
            inner,
            response_code: None,
            message: None,
        }
    }

    /// Response code of the last message written, if any.
    pub fn response_code(&self) -> Option<ResponseCode> {
        self.response_code
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }
}

#[async_trait]
impl<'a> ResponseWriter for ResponseRecorder<'a> {
    fn remote_addr(&self) -> SocketAddr {
        self.inner.remote_addr()
    }

    fn local_addr(&self) -> SocketAddr {
        self.inner.local_addr()
    }

    fn protocol(&self) -> TransportProtocol {
        self.inner.protocol()
    }

    async fn write_message(&mut self, message: Message) -> Result<(), PluginError> {
        self.response_code = Some(message.response_code());
        self.message = Some(message.clone());
        self.inner.write_message(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{MessageType, OpCode};

    struct NullWriter {
        written: usize,
    }

    #[async_trait]
    impl ResponseWriter for NullWriter {
        fn remote_addr(&self) -> SocketAddr {
            SocketAddr::from(([198, 51, 100, 7], 40000))
        }

        fn local_addr(&self) -> SocketAddr {
            SocketAddr::from(([192, 0, 2, 53], 53))
        }

        fn protocol(&self) -> TransportProtocol {
            TransportProtocol::Tcp
        }

        async fn write_message(&mut self, _message: Message) -> Result<(), PluginError> {
            self.written += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_recorder_captures_and_forwards() {
        let mut inner = NullWriter { written: 0 };
        let mut response = Message::new(9, MessageType::Response, OpCode::Query);
        response.set_response_code(ResponseCode::NXDomain);

        let mut recorder = ResponseRecorder::new(&mut inner);
        assert!(recorder.response_code().is_none());
        recorder.write_message(response).await.unwrap();

        assert_eq!(recorder.response_code(), Some(ResponseCode::NXDomain));
        assert_eq!(recorder.message().map(|m| m.id()), Some(9));
        assert_eq!(recorder.endpoint().protocol, "tcp");
        drop(recorder);
        assert_eq!(inner.written, 1);
    }

    #[tokio::test]
    async fn test_next_or_failure_without_next() {
        let mut writer = NullWriter { written: 0 };
        let mut query = Message::new(1, MessageType::Query, OpCode::Query);

        let err = next_or_failure("test", None, &mut writer, &mut query)
            .await
            .unwrap_err();

        assert!(matches!(err, PluginError::NoNextHandler("test")));
        assert_eq!(writer.written, 0);
    }
}
