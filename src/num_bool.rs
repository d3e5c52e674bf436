//! Fixed-width primitive codecs.
//!
//! Every layout is little-endian: booleans are one byte (`0`/`1`), integers
//! and `char` code points are 4 bytes, floats are their IEEE-754 bit patterns
//! in 4 or 8 bytes.

use crate::Codec;

pub fn bool() -> Codec<bool> {
    Codec::new(
        |sink, value| sink.put_bool(*value),
        |cursor| cursor.read_bool(),
    )
}

pub fn u32() -> Codec<u32> {
    Codec::new(
        |sink, value| sink.put_u32(*value),
        |cursor| cursor.read_u32(),
    )
}

pub fn i32() -> Codec<i32> {
    Codec::new(
        |sink, value| sink.put_i32(*value),
        |cursor| cursor.read_i32(),
    )
}

pub fn f32() -> Codec<f32> {
    Codec::new(
        |sink, value| sink.put_f32(*value),
        |cursor| cursor.read_f32(),
    )
}

pub fn f64() -> Codec<f64> {
    Codec::new(
        |sink, value| sink.put_f64(*value),
        |cursor| cursor.read_f64(),
    )
}

/// A codec for Unicode scalar values, stored as their 4 byte code point.
///
/// Decoding rejects code points that are not scalar values (surrogates and
/// anything above `U+10FFFF`) with [`Error::NotACharValue`](crate::Error).
pub fn char() -> Codec<char> {
    Codec::new(
        |sink, value| sink.put_char(*value),
        |cursor| cursor.read_char(),
    )
}
