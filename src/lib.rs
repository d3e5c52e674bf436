// TODO: #![deny(missing_docs)]
// Deny warnings in doc test.
#![doc(test(attr(deny(warnings))))]
#![doc = include_str!("../README.md")]

const FALSE_BOOL: u8 = 0;
const TRUE_BOOL: u8 = 1;

pub mod read;
pub mod write;

pub mod codec;
#[doc(inline)]
pub use codec::{constant, from_bytes, lazy, to_bytes, Codec};

mod num_bool;
pub use num_bool::{bool, char, f32, f64, i32, u32};

mod string;
pub use string::{raw, string};

mod seq;
pub use seq::{array, list, set};

mod map;
pub use map::dict;

mod tuple;
pub use tuple::tuple;

mod record;
pub use record::{record, Push, RecordBuilder};

mod variant;
pub use variant::{custom, CustomTypeBuilder};

/// A decode-time failure, positioned at the point of the value where it
/// occurred.
///
/// Leaf variants describe malformed or missing bytes; `SequenceElement` and
/// `RecordField` wrap an inner error with the index at which a container
/// element or record field failed, nesting arbitrarily deep. Encoding never
/// fails and has no error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unexpected end of input: needed {needed} more bytes, {remaining} remain")]
    ShortRead { needed: usize, remaining: usize },

    #[error("the value '{0}' is not a `bool` value")]
    NotABoolValue(u8),

    #[error("the value '{0:#x}' is not a Unicode scalar value")]
    NotACharValue(u32),

    #[error("the string is not valid UTF-8")]
    InvalidStringUtf8(#[source] std::str::Utf8Error),

    #[error("failure to convert size")]
    SizeConversionError(#[source] std::num::TryFromIntError),

    #[error("{0}")]
    Invalid(String),

    #[error("failure to decode a sequence element at index {index}")]
    SequenceElement { index: usize, source: Box<Error> },

    #[error("failure to decode the record field at index {index}")]
    RecordField { index: usize, source: Box<Error> },

    #[error("the tag '{0}' does not match any registered variant")]
    NoVariantMatches(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
