use bytes::{BufMut, Bytes, BytesMut};

/// The encode-side byte buffer.
///
/// A `Sink` is created for a single encode call, appended to by the codec's
/// encoder, and consumed with [`into_bytes`](Self::into_bytes). All
/// multi-byte layouts are little-endian; [`append`](Self::append) is the only
/// primitive that touches the underlying buffer.
#[derive(Default, Debug)]
pub struct Sink {
    buf: BytesMut,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    pub fn put_byte(&mut self, byte: u8) {
        self.append(&[byte]);
    }

    pub fn put_bool(&mut self, value: bool) {
        self.put_byte(if value {
            crate::TRUE_BOOL
        } else {
            crate::FALSE_BOOL
        });
    }

    pub fn put_u32(&mut self, value: u32) {
        self.append(&value.to_le_bytes());
    }

    pub fn put_i32(&mut self, value: i32) {
        self.append(&value.to_le_bytes());
    }

    pub fn put_f32(&mut self, value: f32) {
        self.append(&value.to_le_bytes());
    }

    pub fn put_f64(&mut self, value: f64) {
        self.append(&value.to_le_bytes());
    }

    pub fn put_char(&mut self, value: char) {
        self.put_u32(value as u32);
    }

    /// Writes a sequence or payload size as its 4 byte wire form.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds `u32::MAX`, which the wire format cannot
    /// represent.
    pub fn put_size(&mut self, size: usize) {
        let size = u32::try_from(size).unwrap_or_else(|_| {
            panic!("size {size} exceeds the 4 byte wire format limit")
        });
        self.put_u32(size);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}
