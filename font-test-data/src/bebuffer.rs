//! A builder for big-endian test data.

use font_types::Scalar;

/// Bytes written in big-endian order, one field at a time.
///
/// Every method takes and returns the buffer by value so fixtures read as a
/// single chain of fields.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer(Vec<u8>);

impl BeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Append one field.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.0.extend_from_slice(item.to_raw().as_ref());
        self
    }

    /// Append a run of fields of the same type.
    pub fn extend<T: Scalar>(self, items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().fold(self, |buf, item| buf.push(item))
    }

    /// Append raw bytes, such as string storage or a whole table.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    /// Pad with zeros to a four-byte boundary, as sfnt tables are.
    pub fn align4(mut self) -> Self {
        let padded = self.0.len().next_multiple_of(4);
        self.0.resize(padded, 0);
        self
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Build a [`BeBuffer`] from a list of scalars.
///
/// ```
/// # use font_test_data::be_buffer;
/// let buf = be_buffer! { 0x00010000u32, 2u16 };
/// assert_eq!(buf.as_slice(), &[0, 1, 0, 0, 0, 2]);
/// ```
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:expr ),* $(,)? ) => {{
        let buf = $crate::bebuffer::BeBuffer::new();
        $( let buf = buf.push($item); )*
        buf
    }};
}
