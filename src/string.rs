//! Size-prefixed payload codecs.
//!
//! Strings and raw blobs share one layout: a 4 byte little-endian byte count
//! followed by that many bytes. A string is a raw blob whose payload must be
//! valid UTF-8.

use crate::{Codec, Error};
use bytes::Bytes;

pub fn string() -> Codec<String> {
    Codec::new(
        |sink, value: &String| {
            sink.put_size(value.len());
            sink.append(value.as_bytes());
        },
        |cursor| {
            let size = cursor.read_size()?;
            let payload = cursor.take(size)?;
            let str = std::str::from_utf8(payload).map_err(Error::InvalidStringUtf8)?;
            Ok(str.to_owned())
        },
    )
}

pub fn raw() -> Codec<Bytes> {
    Codec::new(
        |sink, value: &Bytes| {
            sink.put_size(value.len());
            sink.append(value);
        },
        |cursor| {
            let size = cursor.read_size()?;
            let payload = cursor.take(size)?;
            Ok(Bytes::copy_from_slice(payload))
        },
    )
}
