#![allow(dead_code)]
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use xpf_dns_domain::{AddressFamily, TransportEndpoint, TransportProtocol};
use xpf_dns_infrastructure::dns::{DnsHandler, PluginError, ResponseWriter};

pub struct MockResponseWriter {
    remote: SocketAddr,
    local: SocketAddr,
    protocol: TransportProtocol,
    pub written: Vec<Message>,
}

impl MockResponseWriter {
    pub fn new(remote: &str, local: &str, protocol: TransportProtocol) -> Self {
        Self {
            remote: remote.parse().unwrap(),
            local: local.parse().unwrap(),
            protocol,
            written: Vec::new(),
        }
    }

    pub fn udp_v4() -> Self {
        Self::new("192.0.2.1:5353", "192.0.2.2:53", TransportProtocol::Udp)
    }

    pub fn tcp_v6() -> Self {
        Self::new("[2001:db8::1]:40000", "[2001:db8::53]:53", TransportProtocol::Tcp)
    }
}

#[async_trait]
impl ResponseWriter for MockResponseWriter {
    fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    fn local_addr(&self) -> SocketAddr {
        self.local
    }

    fn protocol(&self) -> TransportProtocol {
        self.protocol
    }

    async fn write_message(&mut self, message: Message) -> Result<(), PluginError> {
        self.written.push(message);
        Ok(())
    }
}

/// Writer whose transport reports no usable address family.
pub struct DetachedResponseWriter {
    pub inner: MockResponseWriter,
}

impl DetachedResponseWriter {
    pub fn new() -> Self {
        Self {
            inner: MockResponseWriter::udp_v4(),
        }
    }
}

#[async_trait]
impl ResponseWriter for DetachedResponseWriter {
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
        self.inner.write_message(message).await
    }

    fn endpoint(&self) -> TransportEndpoint {
        TransportEndpoint {
            family: AddressFamily::Unspecified,
            ..TransportEndpoint::from_socket_addrs(
                self.remote_addr(),
                self.local_addr(),
                self.protocol(),
            )
        }
    }
}

/// Next stage that answers every query with `response_code` and keeps a
/// copy of what it received.
pub struct MockNextHandler {
    response_code: ResponseCode,
    received: Mutex<Vec<Message>>,
    calls: AtomicUsize,
}

impl MockNextHandler {
    pub fn new(response_code: ResponseCode) -> Self {
        Self {
            response_code,
            received: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsHandler for MockNextHandler {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        query: &mut Message,
    ) -> Result<ResponseCode, PluginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(query.clone());

        let mut response = query.to_response();
        response.set_response_code(self.response_code);
        writer.write_message(response).await?;

        Ok(self.response_code)
    }
}
