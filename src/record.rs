//! The record (product type) builder.
//!
//! A record codec is assembled field by field and finalized with the
//! constructor that builds the record from the decoded fields:
//!
//! ```
//! # use bicodec::{f64, record, string};
//! #[derive(Debug, Clone, PartialEq)]
//! struct City {
//!     name: String,
//!     latitude: f64,
//! }
//!
//! let codec = record()
//!     .field(|c: &City| c.name.clone(), string())
//!     .field(|c: &City| c.latitude, f64())
//!     .finish(|(name, latitude)| City { name, latitude });
//!
//! let city = City { name: "Lyon".to_owned(), latitude: 45.76 };
//! assert_eq!(codec.decode(&codec.encode(&city)).unwrap(), city);
//! ```
//!
//! Fields are encoded and decoded strictly in registration order; the wire
//! format carries no field names. A decode failure on the field added at
//! 0-based index `k` wraps the inner error as
//! [`Error::RecordField`](crate::Error) with that index and short-circuits
//! the remaining fields.

use crate::codec::{DecodeFn, EncodeFn};
use crate::{read::Cursor, write::Sink, Codec, Error, Result};
use std::sync::Arc;

mod private {
    pub trait Sealed {}
}

/// Growth step for the tuple of fields decoded so far.
///
/// Implemented for tuples of arity 0 through 11, which bounds records at 12
/// fields.
pub trait Push<A>: private::Sealed {
    type Output;

    fn push(self, value: A) -> Self::Output;
}

macro_rules! impl_push {
    ($($field:ident),*) => {
        impl<$($field),*> private::Sealed for ($($field,)*) {}

        impl<$($field,)* Last> Push<Last> for ($($field,)*) {
            type Output = ($($field,)* Last,);

            #[allow(non_snake_case)]
            fn push(self, value: Last) -> Self::Output {
                let ($($field,)*) = self;
                ($($field,)* value,)
            }
        }
    };
}

impl_push!();
impl_push!(A);
impl_push!(A, B);
impl_push!(A, B, C);
impl_push!(A, B, C, D);
impl_push!(A, B, C, D, E);
impl_push!(A, B, C, D, E, F);
impl_push!(A, B, C, D, E, F, G);
impl_push!(A, B, C, D, E, F, G, H);
impl_push!(A, B, C, D, E, F, G, H, I);
impl_push!(A, B, C, D, E, F, G, H, I, J);
impl_push!(A, B, C, D, E, F, G, H, I, J, K);

/// Starts a record codec with zero fields.
pub fn record<T>() -> RecordBuilder<T, ()> {
    RecordBuilder {
        encoders: Vec::new(),
        decode: Arc::new(|_cursor: &mut Cursor<'_>| Ok(())),
    }
}

/// An in-progress record codec.
///
/// `D` is the tuple of field types added so far, in order. Each
/// [`field`](Self::field) call returns a new builder with one more slot;
/// [`finish`](Self::finish) takes the constructor from that tuple to the
/// record, so arity mismatches are type errors at the assembly point.
pub struct RecordBuilder<T, D> {
    encoders: Vec<Arc<EncodeFn<T>>>,
    decode: Arc<DecodeFn<D>>,
}

impl<T, D> RecordBuilder<T, D>
where
    T: 'static,
    D: 'static,
{
    /// Appends one field, read with `get` on encode and decoded with `codec`.
    pub fn field<A, G>(self, get: G, codec: Codec<A>) -> RecordBuilder<T, D::Output>
    where
        A: 'static,
        G: Fn(&T) -> A + Send + Sync + 'static,
        D: Push<A>,
        D::Output: 'static,
    {
        let index = self.encoders.len();
        let mut encoders = self.encoders;
        let encode_codec = codec.clone();
        encoders.push(Arc::new(move |sink: &mut Sink, value: &T| {
            let field = get(value);
            encode_codec.encode_into(sink, &field);
        }));
        let decoded_so_far = self.decode;
        let decode = Arc::new(move |cursor: &mut Cursor<'_>| -> Result<D::Output> {
            let head = decoded_so_far(cursor)?;
            let field = codec.decode_from(cursor).map_err(|source| Error::RecordField {
                index,
                source: Box::new(source),
            })?;
            Ok(head.push(field))
        });
        RecordBuilder { encoders, decode }
    }

    /// Finalizes the builder into a codec, assembling decoded fields with
    /// `build`.
    pub fn finish<F>(self, build: F) -> Codec<T>
    where
        F: Fn(D) -> T + Send + Sync + 'static,
    {
        let encoders = self.encoders;
        let decode = self.decode;
        Codec::new(
            move |sink, value| {
                for encode_field in &encoders {
                    encode_field(sink, value);
                }
            },
            move |cursor| Ok(build(decode(cursor)?)),
        )
    }
}
