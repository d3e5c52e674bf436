//! The key/value mapping codec.

use crate::{Codec, Error};
use std::collections::HashMap;
use std::hash::Hash;

/// A codec for key/value mappings.
///
/// The layout is a 4 byte little-endian pair count followed by each
/// `(key, value)` pair, key first, in the map's own iteration order. A decode
/// failure in either half of the pair at position `i` wraps the inner error
/// as [`Error::SequenceElement`] with index `i`. Duplicate decoded keys
/// collapse by normal map insertion, keeping the last value.
pub fn dict<K, V>(key: Codec<K>, value: Codec<V>) -> Codec<HashMap<K, V>>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    let decode_key = key.clone();
    let decode_value = value.clone();
    Codec::new(
        move |sink, map: &HashMap<K, V>| {
            sink.put_size(map.len());
            for (k, v) in map {
                key.encode_into(sink, k);
                value.encode_into(sink, v);
            }
        },
        move |cursor| {
            let count = cursor.read_size()?;
            let mut map = HashMap::with_capacity(count.min(cursor.remaining()));
            for index in 0..count {
                let wrap = |source| Error::SequenceElement {
                    index,
                    source: Box::new(source),
                };
                let k = decode_key.decode_from(cursor).map_err(wrap)?;
                let v = decode_value.decode_from(cursor).map_err(wrap)?;
                map.insert(k, v);
            }
            Ok(map)
        },
    )
}
