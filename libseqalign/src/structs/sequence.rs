use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Formatter};
use std::path::Path;

use crate::align::structs::GAP;
use anyhow::{Context, Result};
use thiserror::Error;

const UTF8_SPACE: u8 = b' ';

#[derive(Error, Debug)]
#[error("invalid sequence byte: {byte:#04x} at position {position}")]
pub struct InvalidSequenceByteError {
    pub byte: u8,
    pub position: usize,
}

/// This holds the name and residues of a biological sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The string data of the sequence. Position 1 of
    /// the sequence is at index 1; index 0 is padding
    pub utf8_bytes: Vec<u8>,
}

fn check_residue(byte: u8, position: usize) -> Result<u8> {
    if byte.is_ascii_graphic() && byte != GAP {
        Ok(byte)
    } else {
        Err(InvalidSequenceByteError { byte, position }.into())
    }
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
            let mut utf8_bytes: Vec<u8> = vec![255];

            for line in record.seq_lines() {
                for utf8_byte in line {
                    let position = utf8_bytes.len();
                    utf8_bytes.push(
                        check_residue(*utf8_byte, position)
                            .with_context(|| format!("in fasta record: {name}"))?,
                    );
                }
            }

            seqs.push(Sequence {
                name,
                details,
                length: utf8_bytes.len() - 1,
                utf8_bytes,
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let mut utf8_bytes: Vec<u8> = vec![255; bytes.len() + 1];

        for (idx, utf8_byte) in bytes.iter().enumerate() {
            utf8_bytes[idx + 1] = check_residue(*utf8_byte, idx + 1)?;
        }

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: bytes.len(),
            utf8_bytes,
        })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// The residues of the sequence, without the padding byte.
    pub fn residues(&self) -> &[u8] {
        &self.utf8_bytes[1..]
    }

    /// The residues of the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // residues are checked to be ASCII on construction
        std::str::from_utf8(self.residues()).unwrap_or_default()
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())?;
        Ok(())
    }
}
