use super::parse_hex;
use xpf_dns_infrastructure::dns::PrivateTypeRegistry;

pub fn run_decode(
    registry: &PrivateTypeRegistry,
    rr_type: u16,
    hex: &str,
) -> anyhow::Result<()> {
    let rdata = parse_hex(hex)?;
    let decoded = registry.decode(rr_type, &rdata)?;

    println!("{}", decoded);
    if let Some(transport) = decoded.as_xpf().and_then(|data| data.transport()) {
        println!("; transport: {}", transport);
    }
    Ok(())
}
