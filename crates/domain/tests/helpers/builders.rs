#![allow(dead_code)]
use xpf_dns_domain::{AddressFamily, TransportEndpoint};

pub struct EndpointBuilder {
    src_ip: String,
    src_port: String,
    dst_ip: String,
    dst_port: String,
    family: AddressFamily,
    protocol: String,
}

impl EndpointBuilder {
    pub fn new() -> Self {
        Self {
            src_ip: "192.0.2.1".to_string(),
            src_port: "5353".to_string(),
            dst_ip: "192.0.2.2".to_string(),
            dst_port: "53".to_string(),
            family: AddressFamily::Ipv4,
            protocol: "udp".to_string(),
        }
    }

    pub fn ipv6() -> Self {
        Self::new()
            .src_ip("2001:db8::1")
            .dst_ip("2001:db8::53")
            .family(AddressFamily::Ipv6)
    }

    pub fn src_ip(mut self, ip: &str) -> Self {
        self.src_ip = ip.to_string();
        self
    }

    pub fn dst_ip(mut self, ip: &str) -> Self {
        self.dst_ip = ip.to_string();
        self
    }

    pub fn src_port(mut self, port: &str) -> Self {
        self.src_port = port.to_string();
        self
    }

    pub fn dst_port(mut self, port: &str) -> Self {
        self.dst_port = port.to_string();
        self
    }

    pub fn family(mut self, family: AddressFamily) -> Self {
        self.family = family;
        self
    }

    pub fn protocol(mut self, protocol: &str) -> Self {
        self.protocol = protocol.to_string();
        self
    }

    pub fn build(self) -> TransportEndpoint {
        TransportEndpoint::new(
            self.src_ip,
            self.src_port,
            self.dst_ip,
            self.dst_port,
            self.family,
            self.protocol,
        )
    }
}
