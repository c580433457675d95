use data_encoding::HEXLOWER;
use std::net::SocketAddr;
use xpf_dns_domain::{build_xpf_record, AddressFamily, TransportEndpoint};

/// Prints the XPF record for the given connection: text form, then RDATA hex.
pub fn run_build(src: SocketAddr, dst: SocketAddr, proto: &str) -> anyhow::Result<()> {
    let endpoint = TransportEndpoint::new(
        src.ip().to_string(),
        src.port().to_string(),
        dst.ip().to_string(),
        dst.port().to_string(),
        AddressFamily::of(&src),
        proto,
    );

    let record = build_xpf_record(&endpoint)?;

    println!("{}", record);
    if let Some(transport) = record.transport() {
        println!("; transport: {}", transport);
    }
    println!("{}", HEXLOWER.encode(&record.encode()));
    Ok(())
}
