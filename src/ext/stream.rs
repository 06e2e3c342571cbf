//! Reading streams into byte buffers
//!
//! Readers passed by `&mut` are copied from their current position to EOF.
//! An owned `Cursor<Vec<u8>>` is already fully buffered, so its whole backing
//! buffer is handed back without copying, regardless of the cursor position.

use crate::error::StreamError;
use std::future::Future;
use std::io::{Cursor, Read};
use tokio::io::{AsyncRead, AsyncReadExt};

pub trait ToByteArray {
    /// Materialize the stream contents
    ///
    /// # Examples
    /// ```
    /// use extkit::ext::stream::ToByteArray;
    /// use std::io::Cursor;
    ///
    /// let mut reader = Cursor::new(b"payload".to_vec());
    /// assert_eq!((&mut reader).to_byte_array().unwrap(), b"payload");
    /// assert_eq!(reader.to_byte_array().unwrap(), b"payload");
    /// ```
    fn to_byte_array(self) -> crate::Result<Vec<u8>>;
}

impl<R: Read + ?Sized> ToByteArray for &mut R {
    fn to_byte_array(self) -> crate::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.read_to_end(&mut buffer)
            .map_err(|source| StreamError::Read { source })?;
        log::debug!("Copied {} bytes from stream", buffer.len());
        Ok(buffer)
    }
}

impl ToByteArray for Cursor<Vec<u8>> {
    fn to_byte_array(self) -> crate::Result<Vec<u8>> {
        let buffer = self.into_inner();
        log::debug!("Stream already buffered, returning {} bytes", buffer.len());
        Ok(buffer)
    }
}

impl ToByteArray for Cursor<&[u8]> {
    fn to_byte_array(self) -> crate::Result<Vec<u8>> {
        self.into_inner().to_byte_array()
    }
}

impl ToByteArray for &[u8] {
    fn to_byte_array(self) -> crate::Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}

/// Async counterpart of [`ToByteArray`]; the copy has no timeout and cannot be cancelled
/// other than by dropping the future.
pub trait ToByteArrayAsync {
    fn to_byte_array_async(self) -> impl Future<Output = crate::Result<Vec<u8>>> + Send;
}

impl<R> ToByteArrayAsync for &mut R
where
    R: AsyncRead + Unpin + Send + ?Sized,
{
    async fn to_byte_array_async(self) -> crate::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.read_to_end(&mut buffer)
            .await
            .map_err(|source| StreamError::Read { source })?;
        log::debug!("Copied {} bytes from async stream", buffer.len());
        Ok(buffer)
    }
}

impl ToByteArrayAsync for Cursor<Vec<u8>> {
    async fn to_byte_array_async(self) -> crate::Result<Vec<u8>> {
        ToByteArray::to_byte_array(self)
    }
}

/// Free-function form of [`ToByteArray::to_byte_array`] for any reader
pub fn to_byte_array<R: Read + ?Sized>(reader: &mut R) -> crate::Result<Vec<u8>> {
    reader.to_byte_array()
}

/// Free-function form of [`ToByteArrayAsync::to_byte_array_async`] for any async reader
pub async fn to_byte_array_async<R>(reader: &mut R) -> crate::Result<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + ?Sized,
{
    reader.to_byte_array_async().await
}
