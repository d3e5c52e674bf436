//! The fixed-arity pair codec.

use crate::Codec;

/// A codec for pairs.
///
/// There is no count prefix: the first component's bytes are followed by the
/// second's.
pub fn tuple<A, B>(first: Codec<A>, second: Codec<B>) -> Codec<(A, B)>
where
    A: 'static,
    B: 'static,
{
    let decode_first = first.clone();
    let decode_second = second.clone();
    Codec::new(
        move |sink, value: &(A, B)| {
            first.encode_into(sink, &value.0);
            second.encode_into(sink, &value.1);
        },
        move |cursor| {
            let a = decode_first.decode_from(cursor)?;
            let b = decode_second.decode_from(cursor)?;
            Ok((a, b))
        },
    )
}
