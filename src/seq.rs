//! Homogeneous sequence codecs.
//!
//! Lists, arrays and sets share one layout: a 4 byte little-endian element
//! count followed by each element's encoding in iteration order. A decode
//! failure on the element at index `i` wraps the inner error as
//! [`Error::SequenceElement`] with that index.

use crate::{Codec, Error, Result};
use std::collections::HashSet;
use std::hash::Hash;

pub(crate) fn decode_elements<A: 'static>(
    cursor: &mut crate::read::Cursor<'_>,
    item: &Codec<A>,
) -> Result<Vec<A>> {
    let count = cursor.read_size()?;
    // clamp the preallocation by what the input could possibly hold
    let mut elements = Vec::with_capacity(count.min(cursor.remaining()));
    for index in 0..count {
        let element = item
            .decode_from(cursor)
            .map_err(|source| Error::SequenceElement {
                index,
                source: Box::new(source),
            })?;
        elements.push(element);
    }
    Ok(elements)
}

pub fn list<A>(item: Codec<A>) -> Codec<Vec<A>>
where
    A: 'static,
{
    let decode_item = item.clone();
    Codec::new(
        move |sink, value: &Vec<A>| {
            sink.put_size(value.len());
            for element in value {
                item.encode_into(sink, element);
            }
        },
        move |cursor| decode_elements(cursor, &decode_item),
    )
}

pub fn array<A>(item: Codec<A>) -> Codec<Box<[A]>>
where
    A: 'static,
{
    let decode_item = item.clone();
    Codec::new(
        move |sink, value: &Box<[A]>| {
            sink.put_size(value.len());
            for element in value.iter() {
                item.encode_into(sink, element);
            }
        },
        move |cursor| Ok(decode_elements(cursor, &decode_item)?.into_boxed_slice()),
    )
}

/// A codec for sets of values.
///
/// Elements are written in the set's own iteration order, which is
/// consistent within one encode call but not across processes. Duplicate
/// decoded elements collapse by normal set insertion.
pub fn set<A>(item: Codec<A>) -> Codec<HashSet<A>>
where
    A: Eq + Hash + 'static,
{
    let decode_item = item.clone();
    Codec::new(
        move |sink, value: &HashSet<A>| {
            sink.put_size(value.len());
            for element in value {
                item.encode_into(sink, element);
            }
        },
        move |cursor| Ok(decode_elements(cursor, &decode_item)?.into_iter().collect()),
    )
}
