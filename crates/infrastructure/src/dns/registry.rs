//! Private record-type registry
//!
//! `hickory-proto` parses any record type it does not know into
//! [`RData::Unknown`] with the raw RDATA bytes. The registry maps such
//! private type codes to a decoder so those bytes can be turned back into a
//! typed payload. Lookups take a lock-free snapshot; registration swaps in a
//! new map.

use arc_swap::ArcSwap;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record, RecordType};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use xpf_dns_domain::{XpfError, XpfRecordData};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Record type {code} is already assigned to {name}")]
    ReservedType { code: u16, name: String },

    #[error("Record type {0} is not registered")]
    UnknownType(u16),

    #[error("Failed to decode {name} record: {source}")]
    Decode {
        name: Arc<str>,
        #[source]
        source: XpfError,
    },
}

/// Typed payload of a record whose type was registered as private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateRData {
    Xpf(XpfRecordData),
}

impl PrivateRData {
    pub fn as_xpf(&self) -> Option<&XpfRecordData> {
        match self {
            PrivateRData::Xpf(data) => Some(data),
        }
    }
}

impl fmt::Display for PrivateRData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateRData::Xpf(data) => fmt::Display::fmt(data, f),
        }
    }
}

/// Decodes raw RDATA into a [`PrivateRData`].
pub type PrivateDecoder = fn(&[u8]) -> Result<PrivateRData, XpfError>;

#[derive(Clone)]
struct PrivateType {
    name: Arc<str>,
    decoder: PrivateDecoder,
}

/// Returns the hickory record type for `code`, refusing codes hickory
/// already assigns to a standard type.
pub fn private_record_type(code: u16) -> Result<RecordType, RegistryError> {
    match RecordType::from(code) {
        RecordType::Unknown(code) => Ok(RecordType::Unknown(code)),
        known => Err(RegistryError::ReservedType {
            code,
            name: known.to_string(),
        }),
    }
}

/// Shared table of private record types. Hand the same `Arc` to every
/// component that registers or decodes private records.
pub struct PrivateTypeRegistry {
    types: ArcSwap<HashMap<u16, PrivateType>>,
}

impl Default for PrivateTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivateTypeRegistry {
    pub fn new() -> Self {
        Self {
            types: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Registers `decoder` for `code` under the mnemonic `name`. A second
    /// registration of the same code replaces the first.
    pub fn register(
        &self,
        name: &str,
        code: u16,
        decoder: PrivateDecoder,
    ) -> Result<(), RegistryError> {
        private_record_type(code)?;

        let entry = PrivateType {
            name: name.into(),
            decoder,
        };
        self.types.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.insert(code, entry.clone());
            next
        });

        info!(name, code, "Registered private record type");
        Ok(())
    }

    /// Removes the registration for `code`. Returns `false` if nothing was
    /// registered under it.
    pub fn unregister(&self, code: u16) -> bool {
        let mut removed = false;
        self.types.rcu(|current| {
            let mut next = HashMap::clone(current);
            removed = next.remove(&code).is_some();
            next
        });

        if removed {
            info!(code, "Unregistered private record type");
        } else {
            debug!(code, "Private record type was not registered");
        }
        removed
    }

    pub fn is_registered(&self, code: u16) -> bool {
        self.types.load().contains_key(&code)
    }

    pub fn name_of(&self, code: u16) -> Option<Arc<str>> {
        self.types.load().get(&code).map(|t| Arc::clone(&t.name))
    }

    pub fn len(&self) -> usize {
        self.types.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.load().is_empty()
    }

    pub fn decode(&self, code: u16, rdata: &[u8]) -> Result<PrivateRData, RegistryError> {
        let types = self.types.load();
        let entry = types.get(&code).ok_or(RegistryError::UnknownType(code))?;

        (entry.decoder)(rdata).map_err(|source| RegistryError::Decode {
            name: Arc::clone(&entry.name),
            source,
        })
    }

    /// Decodes `record` if it carries a registered private type.
    /// Returns `Ok(None)` for every other record.
    pub fn decode_record(&self, record: &Record) -> Result<Option<PrivateRData>, RegistryError> {
        // hickory reads RDLENGTH 0 as `Update0`, never as an empty `Unknown`.
        let (code, rdata) = match record.data() {
            RData::Unknown { code, rdata } => (u16::from(*code), rdata.anything()),
            RData::Update0(record_type) => (u16::from(*record_type), &[][..]),
            _ => return Ok(None),
        };

        if !self.is_registered(code) {
            return Ok(None);
        }
        self.decode(code, rdata).map(Some)
    }

    /// Decodes every registered private record in the additional section,
    /// in section order, paired with its type code.
    pub fn decode_additionals(
        &self,
        message: &Message,
    ) -> Result<Vec<(u16, PrivateRData)>, RegistryError> {
        let mut decoded = Vec::new();
        for record in message.additionals() {
            if let Some(data) = self.decode_record(record)? {
                decoded.push((u16::from(record.record_type()), data));
            }
        }
        Ok(decoded)
    }
}
