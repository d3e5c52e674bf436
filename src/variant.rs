//! The custom type (sum type) builder.
//!
//! Each registered variant gets a sequential tag starting at 0, written as a
//! single byte before the variant's payload fields. Encoding dispatches on
//! the value's own constructor through per-variant `select` functions (a
//! `match` returning the payload when the value is that variant); decoding
//! reads the tag and runs the matching variant's argument codecs in order.
//!
//! ```
//! # use bicodec::{custom, f64};
//! #[derive(Debug, Clone, PartialEq)]
//! enum Shape {
//!     Empty,
//!     Circle(f64),
//!     Rect(f64, f64),
//! }
//!
//! let codec = custom()
//!     .variant0(|| Shape::Empty, |s| matches!(s, Shape::Empty).then_some(()))
//!     .variant1(
//!         Shape::Circle,
//!         |s| match s {
//!             Shape::Circle(r) => Some((*r,)),
//!             _ => None,
//!         },
//!         f64(),
//!     )
//!     .variant2(
//!         Shape::Rect,
//!         |s| match s {
//!             Shape::Rect(w, h) => Some((*w, *h)),
//!             _ => None,
//!         },
//!         f64(),
//!         f64(),
//!     )
//!     .finish();
//!
//! let shape = Shape::Rect(2.0, 3.0);
//! assert_eq!(codec.decode(&codec.encode(&shape)).unwrap(), shape);
//! ```

use crate::codec::DecodeFn;
use crate::{read::Cursor, write::Sink, Codec, Error, Result};
use std::sync::Arc;

// Writes tag + payload and reports a match, or writes nothing.
type SelectEncodeFn<T> = dyn Fn(&T, &mut Sink) -> bool + Send + Sync;

struct VariantCodec<T> {
    encode: Arc<SelectEncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

/// Starts a custom type codec with zero registered variants.
pub fn custom<T>() -> CustomTypeBuilder<T> {
    CustomTypeBuilder {
        variants: Vec::new(),
    }
}

/// An in-progress custom type codec.
///
/// Variants registered through `variant0` .. `variant8` must together cover
/// every constructor of `T`: the codec produced by [`finish`](Self::finish)
/// panics when asked to encode a value no registered `select` recognizes.
pub struct CustomTypeBuilder<T> {
    variants: Vec<VariantCodec<T>>,
}

macro_rules! declare_variant {
    ($(#[$doc:meta])* $name:ident $(, ($codec:ident, $value:ident, $ty:ident))*) => {
        $(#[$doc])*
        pub fn $name<$($ty),*>(
            mut self,
            make: impl Fn($($ty),*) -> T + Send + Sync + 'static,
            select: impl Fn(&T) -> Option<($($ty,)*)> + Send + Sync + 'static,
            $($codec: Codec<$ty>,)*
        ) -> Self
        where
            $($ty: 'static,)*
        {
            let tag = self.next_tag();
            let encode: Arc<SelectEncodeFn<T>> = {
                $(let $codec = $codec.clone();)*
                Arc::new(move |value: &T, sink: &mut Sink| match select(value) {
                    Some(($($value,)*)) => {
                        sink.put_byte(tag);
                        $($codec.encode_into(sink, &$value);)*
                        true
                    }
                    None => false,
                })
            };
            let decode: Arc<DecodeFn<T>> =
                Arc::new(move |_cursor: &mut Cursor<'_>| -> Result<T> {
                    $(let $value = $codec.decode_from(_cursor)?;)*
                    Ok(make($($value),*))
                });
            self.variants.push(VariantCodec { encode, decode });
            self
        }
    };
}

impl<T> CustomTypeBuilder<T>
where
    T: 'static,
{
    fn next_tag(&self) -> u8 {
        let tag = self.variants.len();
        assert!(
            tag <= usize::from(u8::MAX),
            "a custom type codec supports at most 256 variants"
        );
        tag as u8
    }

    declare_variant!(
        /// Registers a payload-free variant.
        variant0
    );
    declare_variant!(variant1, (a, v0, A));
    declare_variant!(variant2, (a, v0, A), (b, v1, B));
    declare_variant!(variant3, (a, v0, A), (b, v1, B), (c, v2, C));
    declare_variant!(variant4, (a, v0, A), (b, v1, B), (c, v2, C), (d, v3, D));
    declare_variant!(
        variant5,
        (a, v0, A),
        (b, v1, B),
        (c, v2, C),
        (d, v3, D),
        (e, v4, E)
    );
    declare_variant!(
        variant6,
        (a, v0, A),
        (b, v1, B),
        (c, v2, C),
        (d, v3, D),
        (e, v4, E),
        (f, v5, F)
    );
    declare_variant!(
        variant7,
        (a, v0, A),
        (b, v1, B),
        (c, v2, C),
        (d, v3, D),
        (e, v4, E),
        (f, v5, F),
        (g, v6, G)
    );
    declare_variant!(
        variant8,
        (a, v0, A),
        (b, v1, B),
        (c, v2, C),
        (d, v3, D),
        (e, v4, E),
        (f, v5, F),
        (g, v6, G),
        (h, v7, H)
    );

    /// Finalizes the builder into a codec.
    ///
    /// Decoding a tag with no registered variant fails with
    /// [`Error::NoVariantMatches`].
    ///
    /// # Panics
    ///
    /// The returned codec panics on encode if the value is recognized by no
    /// registered `select` function, which means the registrations do not
    /// cover every constructor of `T`.
    pub fn finish(self) -> Codec<T> {
        let decode_variants: Vec<_> = self
            .variants
            .iter()
            .map(|variant| Arc::clone(&variant.decode))
            .collect();
        let encode_variants: Vec<_> = self
            .variants
            .into_iter()
            .map(|variant| variant.encode)
            .collect();
        Codec::new(
            move |sink, value| {
                for encode_variant in &encode_variants {
                    if encode_variant(value, sink) {
                        return;
                    }
                }
                panic!("the value matches no registered variant of this custom type codec");
            },
            move |cursor| {
                let tag = cursor.read_byte()?;
                match decode_variants.get(usize::from(tag)) {
                    Some(decode_variant) => decode_variant(cursor),
                    None => Err(Error::NoVariantMatches(tag)),
                }
            },
        )
    }
}
