//! The SD record format: plain-old-data values stored as length-prefixed
//! chunks on any byte stream.
//!
//! A record is the payload length as a `u64` in native byte order, followed
//! by that many payload bytes. There is no header, magic number or endianness
//! marker. Records written on a little-endian machine will not read back on a
//! big-endian one, and nothing here detects that.
//!
//! Streams belong to the caller: these functions neither open, buffer, lock
//! nor close them.
use core::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use derive_more::{Deref, DerefMut, From, Into};
use rustix::fs::{self, Mode, OFlags};
use rustix::io::Errno;
use tracing::debug;

/// Bytes taken by the length prefix of every record.
pub const LEN_PREFIX: usize = core::mem::size_of::<u64>();

/// Raw bytes of one serialized value.
#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, From, Into, PartialEq)]
pub struct Chunk(Vec<u8>);

impl AsRef<[u8]> for Chunk {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

#[derive(Debug, From)]
pub enum Err {
	/// A chunk can only become a value of exactly its own size.
	#[from(ignore)]
	SizeMismatch { chunk: usize, expected: usize },
	/// The stream ended part way through a record.
	#[from(ignore)]
	Truncated { expected: usize, read: usize },
	Io(io::Error),
	#[from(ignore)]
	Open { path: PathBuf, errno: Errno },
	Read(Errno),
	Utf8(std::string::FromUtf8Error),
}

impl fmt::Display for Err {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Err::SizeMismatch { chunk, expected } => write!(
				f,
				"chunk size ({}) does not match type size ({})",
				chunk, expected
			),
			Err::Truncated { expected, read } => {
				write!(f, "stream ended after {} of {} bytes", read, expected)
			}
			Err::Io(err) => write!(f, "i/o error: {}", err),
			Err::Open { path, errno } => {
				write!(f, "failed to open file {}: {}", path.display(), errno)
			}
			Err::Read(errno) => write!(f, "failed to read file: {}", errno),
			Err::Utf8(err) => write!(f, "file is not valid utf-8: {}", err),
		}
	}
}

impl std::error::Error for Err {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Err::Io(err) => Some(err),
			Err::Open { errno, .. } | Err::Read(errno) => Some(errno),
			Err::Utf8(err) => Some(err),
			Err::SizeMismatch { .. } | Err::Truncated { .. } => None,
		}
	}
}

/// The bytes of `value`, exactly `size_of::<T>()` of them.
pub fn to_chunk<T: bytemuck::Pod>(value: &T) -> Chunk {
	Chunk(bytemuck::bytes_of(value).to_vec())
}

/// Rebuilds a `T` from its bytes. The chunk need not be aligned.
pub fn from_chunk<T: bytemuck::Pod>(chunk: &[u8]) -> Result<T, Err> {
	let expected = core::mem::size_of::<T>();
	if chunk.len() != expected {
		return Err(Err::SizeMismatch { chunk: chunk.len(), expected });
	}

	Ok(bytemuck::pod_read_unaligned(chunk))
}

/// Reads at most `len` bytes, stopping early only at end of stream.
fn read_up_to<R: Read>(input: &mut R, len: usize) -> Result<Vec<u8>, Err> {
	// not preallocated: a corrupt prefix could ask for anything
	let mut bytes = Vec::new();
	input.by_ref().take(len as u64).read_to_end(&mut bytes)?;
	Ok(bytes)
}

/// `None` when the stream ends cleanly, before the first byte of a record.
fn next_chunk<R: Read>(input: &mut R) -> Result<Option<Chunk>, Err> {
	let prefix = read_up_to(input, LEN_PREFIX)?;
	if prefix.is_empty() {
		return Ok(None);
	}
	if prefix.len() != LEN_PREFIX {
		return Err(Err::Truncated { expected: LEN_PREFIX, read: prefix.len() });
	}

	let mut raw = [0u8; LEN_PREFIX];
	raw.copy_from_slice(&prefix);
	let len = u64::from_ne_bytes(raw) as usize;

	let payload = read_up_to(input, len)?;
	if payload.len() != len {
		return Err(Err::Truncated { expected: len, read: payload.len() });
	}

	debug!(len, "read chunk");
	Ok(Some(Chunk(payload)))
}

/// Reads one record. Running out of stream, even before the record starts,
/// is `Err::Truncated`.
pub fn read_chunk<R: Read>(input: &mut R) -> Result<Chunk, Err> {
	next_chunk(input)?.ok_or(Err::Truncated { expected: LEN_PREFIX, read: 0 })
}

pub fn write_chunk<W: Write>(output: &mut W, chunk: &[u8]) -> Result<(), Err> {
	let len = chunk.len() as u64;
	output.write_all(&len.to_ne_bytes())?;
	output.write_all(chunk)?;
	debug!(len, "wrote chunk");
	Ok(())
}

pub fn read_data<T: bytemuck::Pod, R: Read>(input: &mut R) -> Result<T, Err> {
	let chunk = read_chunk(input)?;
	from_chunk(&chunk)
}

pub fn write_data<T: bytemuck::Pod, W: Write>(
	output: &mut W,
	value: &T,
) -> Result<(), Err> {
	write_chunk(output, &to_chunk(value))
}

/// Every record left in a stream, in order.
///
/// Ends at a clean record boundary. After the first error it yields nothing
/// more, since the stream position is no longer trustworthy.
pub struct Records<R> {
	input: R,
	done: bool,
}

impl<R: Read> Records<R> {
	pub fn new(input: R) -> Self {
		Self { input, done: false }
	}

	pub fn into_inner(self) -> R {
		self.input
	}
}

impl<R: Read> Iterator for Records<R> {
	type Item = Result<Chunk, Err>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let next = next_chunk(&mut self.input).transpose();
		if !matches!(next, Some(Ok(_))) {
			self.done = true;
		}
		next
	}
}

/// The whole file as a string. Buffers everything in memory.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<String, Err> {
	let path = path.as_ref();
	let fd = fs::open(path, OFlags::RDONLY | OFlags::CLOEXEC, Mode::empty())
		.map_err(|errno| Err::Open { path: path.to_path_buf(), errno })?;

	// size is only a capacity hint; the read loop decides
	let hint = fs::fstat(&fd)
		.ok()
		.and_then(|stat| usize::try_from(stat.st_size).ok())
		.unwrap_or(0);

	let mut bytes = Vec::with_capacity(hint);
	let mut buf = [0u8; 4096];
	loop {
		match rustix::io::read(&fd, &mut buf) {
			Ok(0) => break,
			Ok(n) => bytes.extend_from_slice(&buf[..n]),
			Err(errno) if errno == Errno::INTR => continue,
			Err(errno) => return Err(Err::Read(errno)),
		}
	}

	let text = String::from_utf8(bytes)?;
	debug!(path = %path.display(), len = text.len(), "read file");
	Ok(text)
}
