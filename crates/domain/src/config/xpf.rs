use serde::{Deserialize, Serialize};

use crate::xpf_record::DEFAULT_XPF_RR_TYPE;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct XpfConfig {
    /// Numeric record type the XPF record is emitted and registered under
    #[serde(default = "default_rr_type")]
    pub rr_type: u16,
}

impl Default for XpfConfig {
    fn default() -> Self {
        Self {
            rr_type: default_rr_type(),
        }
    }
}

fn default_rr_type() -> u16 {
    DEFAULT_XPF_RR_TYPE
}
