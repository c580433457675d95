//! XPF DNS Infrastructure Layer
//!
//! Glue between the domain XPF record and `hickory-proto` messages: the
//! handler chain, the private record-type registry and the XPF plugin.
pub mod dns;
