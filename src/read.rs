use crate::{Error, Result};

/// The decode-side view over an input byte sequence.
///
/// A `Cursor` is created for a single decode call over the complete input.
/// [`take`](Self::take) is the only consuming primitive: it either yields
/// exactly the requested bytes and advances past them, or fails with
/// [`Error::ShortRead`] and leaves the cursor untouched.
#[derive(Debug)]
pub struct Cursor<'b> {
    data: &'b [u8],
}

impl<'b> Cursor<'b> {
    pub fn new(data: &'b [u8]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn take(&mut self, count: usize) -> Result<&'b [u8]> {
        if count > self.data.len() {
            return Err(Error::ShortRead {
                needed: count,
                remaining: self.data.len(),
            });
        }
        let (head, tail) = self.data.split_at(count);
        self.data = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        let byte = self.read_byte()?;
        match byte {
            crate::FALSE_BOOL => Ok(false),
            crate::TRUE_BOOL => Ok(true),
            _ => Err(Error::NotABoolValue(byte)),
        }
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take_array()?;
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take_array()?;
        Ok(i32::from_le_bytes(bytes))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.take_array()?;
        Ok(f32::from_le_bytes(bytes))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.take_array()?;
        Ok(f64::from_le_bytes(bytes))
    }

    pub fn read_char(&mut self) -> Result<char> {
        let code_point = self.read_u32()?;
        char::from_u32(code_point).ok_or(Error::NotACharValue(code_point))
    }

    pub fn read_size(&mut self) -> Result<usize> {
        let size = self
            .read_u32()?
            .try_into()
            .map_err(Error::SizeConversionError)?;
        Ok(size)
    }
}
