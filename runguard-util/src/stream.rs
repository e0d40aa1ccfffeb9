//! Buffered stream copying.

use std::io::{self, Read, Write};

/// Buffer size used by [`copy_stream`].
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Copy `source` to `destination` with the default buffer size, returning
/// the number of bytes copied.
pub fn copy_stream<R, W>(source: &mut R, destination: &mut W) -> io::Result<u64>
where
    R: Read,
    W: Write,
{
    copy_stream_with(source, destination, DEFAULT_BUFFER_SIZE)
}

/// Copy `source` to `destination` through a buffer of `buffer_size` bytes.
///
/// A zero buffer size is rejected as `InvalidInput`. Interrupted reads are
/// retried. The destination is not flushed; the caller decides when.
pub fn copy_stream_with<R, W>(
    source: &mut R,
    destination: &mut W,
    buffer_size: usize,
) -> io::Result<u64>
where
    R: Read,
    W: Write,
{
    if buffer_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "buffer size must be a positive integer",
        ));
    }

    let mut buffer = vec![0u8; buffer_size];
    let mut copied = 0u64;

    loop {
        let read = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        destination.write_all(&buffer[..read])?;
        copied += read as u64;
    }

    Ok(copied)
}
