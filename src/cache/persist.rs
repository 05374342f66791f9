//! Binary persistence for the feedback matrix
//!
//! Layout (all integers little-endian):
//!
//! | bytes | field |
//! |---|---|
//! | 4 | magic `WFBC` |
//! | 1 | format version (1) |
//! | 1 | word length |
//! | 4 | rows (u32) |
//! | 4 | cols (u32) |
//! | rows × cols × 2 | cells (u16), row-major |
//!
//! The vocabulary itself is not stored: its sorted order is reproducible, and
//! any reordering is caught by the self-test.

use super::FeedbackCache;
use crate::core::{Error, Result, pattern_space};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: [u8; 4] = *b"WFBC";
const VERSION: u8 = 1;
const HEADER_LEN: usize = 14;
const CHUNK_CELLS: usize = 1 << 15;

/// Where a prepared cache came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    Loaded,
    Built,
}

impl FeedbackCache {
    /// Write the matrix in the persisted layout
    ///
    /// # Errors
    /// Returns `Io` on write failure and `MalformedCache` if the matrix is too
    /// large for the header.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let dim = u32::try_from(self.size()).map_err(|_| {
            Error::MalformedCache(format!("{} rows do not fit the header", self.size()))
        })?;

        writer.write_all(&MAGIC)?;
        writer.write_all(&[VERSION, self.word_len() as u8])?;
        writer.write_all(&dim.to_le_bytes())?;
        writer.write_all(&dim.to_le_bytes())?;

        for chunk in self.cells().chunks(CHUNK_CELLS) {
            let bytes: Vec<u8> = chunk.iter().flat_map(|cell| cell.to_le_bytes()).collect();
            writer.write_all(&bytes)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Serialise into a byte vector
    ///
    /// # Errors
    /// Returns `MalformedCache` if the matrix is too large for the header.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.cells().len() * 2);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Read a persisted matrix and check it fits `vocab`
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the stored shape is not (N, N) for the
    /// vocabulary, `MalformedCache` for a bad header, wrong word length,
    /// out-of-range cell, truncated body or trailing data, and `Io` for
    /// other read failures.
    pub fn read_from<R: Read>(mut reader: R, vocab: &Vocabulary) -> Result<Self> {
        let mut header = [0u8; HEADER_LEN];
        read_block(&mut reader, &mut header, "header")?;

        if header[..4] != MAGIC {
            return Err(Error::MalformedCache("missing WFBC magic".to_string()));
        }
        if header[4] != VERSION {
            return Err(Error::MalformedCache(format!(
                "unsupported format version {}",
                header[4]
            )));
        }

        let word_len = usize::from(header[5]);
        let rows = le_u32(&header[6..10]) as usize;
        let cols = le_u32(&header[10..14]) as usize;
        let size = vocab.full_len();

        if rows != size || cols != size {
            return Err(Error::SizeMismatch {
                expected: size,
                rows,
                cols,
            });
        }
        if word_len != vocab.word_len() {
            return Err(Error::MalformedCache(format!(
                "stored word length {word_len} does not match vocabulary word length {}",
                vocab.word_len()
            )));
        }

        let total = size * size;
        let space = pattern_space(word_len);
        let mut cells = Vec::with_capacity(total);
        let mut buf = vec![0u8; CHUNK_CELLS * 2];

        while cells.len() < total {
            let take = (total - cells.len()).min(CHUNK_CELLS);
            let bytes = &mut buf[..take * 2];
            read_block(&mut reader, bytes, "cell data")?;

            for pair in bytes.chunks_exact(2) {
                let value = u16::from_le_bytes([pair[0], pair[1]]);
                if usize::from(value) >= space {
                    return Err(Error::MalformedCache(format!(
                        "cell value {value} out of range for {word_len}-letter words"
                    )));
                }
                cells.push(value);
            }
        }

        let mut probe = [0u8; 1];
        if reader.read(&mut probe)? != 0 {
            return Err(Error::MalformedCache("trailing data after cells".to_string()));
        }

        Ok(Self::from_parts(size, word_len, cells))
    }

    /// Deserialise from bytes, see [`read_from`](Self::read_from)
    ///
    /// # Errors
    /// Same as [`read_from`](Self::read_from).
    pub fn from_bytes(bytes: &[u8], vocab: &Vocabulary) -> Result<Self> {
        Self::read_from(bytes, vocab)
    }

    /// Save to a file, replacing it
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    /// Load from a file, see [`read_from`](Self::read_from)
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be opened, otherwise as
    /// [`read_from`](Self::read_from).
    pub fn load<P: AsRef<Path>>(path: P, vocab: &Vocabulary) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file), vocab)
    }

    /// Load the matrix at `path`, or build and save it there if missing
    ///
    /// Either way the matrix is self-tested with `trials` repetitions before
    /// it is returned.
    ///
    /// # Errors
    /// Any load or save error, or `CacheValidationFailure` if the self-test
    /// fails.
    pub fn load_or_build<P, R>(
        path: P,
        vocab: &Vocabulary,
        trials: usize,
        rng: &mut R,
        progress: &ProgressBar,
    ) -> Result<(Self, CacheOrigin)>
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        let path = path.as_ref();

        let (cache, origin) = if path.exists() {
            (Self::load(path, vocab)?, CacheOrigin::Loaded)
        } else {
            let cache = Self::build_with_progress(vocab, progress);
            cache.save(path)?;
            (cache, CacheOrigin::Built)
        };

        cache.validate(vocab, trials, rng)?;
        Ok((cache, origin))
    }
}

fn read_block<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::MalformedCache(format!("truncated {what}")),
        _ => Error::Io(err),
    })
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
