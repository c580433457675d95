mod augment;
mod build;
mod decode;

pub use augment::run_augment;
pub use build::run_build;
pub use decode::run_decode;

use anyhow::Context;
use data_encoding::HEXLOWER_PERMISSIVE;

fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    HEXLOWER_PERMISSIVE
        .decode(cleaned.as_bytes())
        .with_context(|| format!("Invalid hex input '{}'", input))
}
