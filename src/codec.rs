use crate::{read::Cursor, write::Sink, Error, Result};
use bytes::Bytes;
use std::sync::{Arc, OnceLock};

pub(crate) type EncodeFn<T> = dyn Fn(&mut Sink, &T) + Send + Sync;
pub(crate) type DecodeFn<T> = dyn Fn(&mut Cursor<'_>) -> Result<T> + Send + Sync;

/// A paired encoder and decoder for values of type `T`.
///
/// Codecs are immutable values: composing two codecs never mutates either,
/// cloning one is a cheap reference bump, and a finalized codec may be shared
/// and used from any number of threads at once. For every value in the domain
/// a codec is built to cover, decoding what it encoded yields the value back.
pub struct Codec<T> {
    encode: Arc<EncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> std::fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

impl<T> Codec<T>
where
    T: 'static,
{
    /// Builds a codec from an encoder and a decoder.
    ///
    /// This is the extension point for custom primitives. The decoder must
    /// advance the cursor by exactly the bytes the encoder produced on
    /// success; on failure the cursor position is unspecified.
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&mut Sink, &T) + Send + Sync + 'static,
        D: Fn(&mut Cursor<'_>) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Encodes `value` into a fresh byte sequence.
    pub fn encode(&self, value: &T) -> Bytes {
        let mut sink = Sink::new();
        self.encode_into(&mut sink, value);
        sink.into_bytes()
    }

    /// Decodes one value from the front of `bytes`.
    ///
    /// Trailing bytes past what the codec consumes are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<T> {
        let mut cursor = Cursor::new(bytes);
        self.decode_from(&mut cursor)
    }

    /// Appends the encoding of `value` to an existing sink.
    pub fn encode_into(&self, sink: &mut Sink, value: &T) {
        (self.encode)(sink, value);
    }

    /// Decodes one value from an existing cursor, advancing it.
    pub fn decode_from(&self, cursor: &mut Cursor<'_>) -> Result<T> {
        (self.decode)(cursor)
    }

    /// Transforms the codec's value space with a total bidirectional mapping.
    ///
    /// `to` converts a decoded inner value outward, `from` converts an outer
    /// value back before encoding. No bytes of its own are written or read.
    pub fn map<U, ToFn, FromFn>(self, to: ToFn, from: FromFn) -> Codec<U>
    where
        U: 'static,
        ToFn: Fn(T) -> U + Send + Sync + 'static,
        FromFn: Fn(&U) -> T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Codec::new(
            move |sink, value| {
                let inner_value = from(value);
                inner.encode_into(sink, &inner_value);
            },
            move |cursor| Ok(to(self.decode_from(cursor)?)),
        )
    }

    /// Refines the codec with a validator applied after decoding.
    ///
    /// `validate` either produces the refined value or a failure message,
    /// which decodes to [`Error::Invalid`]. `revert` turns a refined value
    /// back into the inner representation before encoding. The round-trip
    /// guarantee narrows to the values the validator accepts.
    pub fn and_then<U, V, R>(self, validate: V, revert: R) -> Codec<U>
    where
        U: 'static,
        V: Fn(T) -> std::result::Result<U, String> + Send + Sync + 'static,
        R: Fn(&U) -> T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Codec::new(
            move |sink, value| {
                let inner_value = revert(value);
                inner.encode_into(sink, &inner_value);
            },
            move |cursor| {
                let inner_value = self.decode_from(cursor)?;
                validate(inner_value).map_err(Error::Invalid)
            },
        )
    }

    /// Wraps the codec into one for optional values.
    ///
    /// An absent value encodes as the single byte `0`; a present one as the
    /// byte `1` followed by the inner encoding.
    pub fn maybe(self) -> Codec<Option<T>> {
        let inner = self.clone();
        Codec::new(
            move |sink, value: &Option<T>| match value {
                Some(value) => {
                    sink.put_bool(true);
                    inner.encode_into(sink, value);
                }
                None => sink.put_bool(false),
            },
            move |cursor| {
                if cursor.read_bool()? {
                    Ok(Some(self.decode_from(cursor)?))
                } else {
                    Ok(None)
                }
            },
        )
    }
}

/// Encodes `value` with `codec` into a fresh byte sequence.
pub fn to_bytes<T: 'static>(codec: &Codec<T>, value: &T) -> Bytes {
    codec.encode(value)
}

/// Decodes one value from the front of `bytes` with `codec`.
pub fn from_bytes<T: 'static>(codec: &Codec<T>, bytes: &[u8]) -> Result<T> {
    codec.decode(bytes)
}

/// A zero-width codec that always yields `value`.
///
/// Encoding writes nothing; decoding consumes nothing and succeeds even on
/// empty input.
pub fn constant<T>(value: T) -> Codec<T>
where
    T: Clone + Send + Sync + 'static,
{
    Codec::new(|_sink, _value| {}, move |_cursor| Ok(value.clone()))
}

/// Defers construction of a codec until its first use.
///
/// `codec_fn` is invoked once, on the first encode or decode call, and the
/// resulting codec is memoized. This breaks the construction cycle of
/// self-referential definitions: a codec for a recursive type names itself
/// through `lazy` instead of building itself eagerly forever.
pub fn lazy<T, F>(codec_fn: F) -> Codec<T>
where
    T: 'static,
    F: Fn() -> Codec<T> + Send + Sync + 'static,
{
    let cell = Arc::new(OnceLock::new());
    let codec_fn = Arc::new(codec_fn);
    let encode_cell = Arc::clone(&cell);
    let encode_fn = Arc::clone(&codec_fn);
    Codec::new(
        move |sink, value: &T| {
            encode_cell
                .get_or_init(|| encode_fn())
                .encode_into(sink, value)
        },
        move |cursor| cell.get_or_init(|| codec_fn()).decode_from(cursor),
    )
}
