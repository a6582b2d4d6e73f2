//! Wire decoders building teacher entities from external formats.
//!
//! # Responsibility
//! - Parse the delimited-string, JSON and XML teacher representations.
//! - Hand every parsed parameter set to the validating constructor.
//!
//! # Invariants
//! - Decoders never bypass entity validation.
//! - Format dispatch is a closed three-way choice; detection by outer
//!   characters is a convenience, the per-format functions are the
//!   primary API.

mod decode;

pub use decode::{
    decode, decode_delimited, decode_json, decode_xml, detect_format, CodecError, CodecResult,
    DecodeError, WireFormat,
};
