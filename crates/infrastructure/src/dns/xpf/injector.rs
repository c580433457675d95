use crate::dns::registry::{private_record_type, RegistryError};
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use xpf_dns_domain::{build_xpf_record, TransportEndpoint, XpfError, DEFAULT_XPF_RR_TYPE};

/// Builds XPF records and appends them to outgoing queries.
#[derive(Debug, Clone, Copy)]
pub struct XpfRecordInjector {
    rr_type: RecordType,
}

impl Default for XpfRecordInjector {
    fn default() -> Self {
        Self {
            rr_type: RecordType::Unknown(DEFAULT_XPF_RR_TYPE),
        }
    }
}

impl XpfRecordInjector {
    pub fn new(rr_type: u16) -> Result<Self, RegistryError> {
        Ok(Self {
            rr_type: private_record_type(rr_type)?,
        })
    }

    pub fn rr_type(&self) -> u16 {
        u16::from(self.rr_type)
    }

    /// Wraps the XPF data for `endpoint` in a resource record owned by the
    /// root name, class IN, TTL 0.
    pub fn build_record(&self, endpoint: &TransportEndpoint) -> Result<Record, XpfError> {
        let data = build_xpf_record(endpoint)?;
        let rdata = RData::Unknown {
            code: self.rr_type,
            rdata: NULL::with(data.encode()),
        };
        Ok(Record::from_rdata(Name::root(), 0, rdata))
    }

    /// Appends the XPF record for `endpoint` after any records already in
    /// the additional section of `message`.
    pub fn append(
        &self,
        endpoint: &TransportEndpoint,
        message: &mut Message,
    ) -> Result<(), XpfError> {
        let record = self.build_record(endpoint)?;
        message.add_additional(record);
        Ok(())
    }
}
