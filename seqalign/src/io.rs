use std::path::Path;

use indexmap::IndexMap;
use libseqalign::structs::Sequence;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no sequences found in: {path}")]
pub struct EmptySequenceFileError {
    path: String,
}

#[derive(Error, Debug)]
#[error("duplicate sequence name: \"{name}\" in: {path}")]
pub struct DuplicateSequenceNameError {
    name: String,
    path: String,
}

/// Read every record of a FASTA file, keyed by name in file order.
pub fn read_sequences(path: impl AsRef<Path>) -> anyhow::Result<IndexMap<String, Sequence>> {
    let path_string = path.as_ref().to_string_lossy().to_string();
    let sequences = Sequence::from_fasta(&path)?;

    if sequences.is_empty() {
        return Err(EmptySequenceFileError { path: path_string }.into());
    }

    let mut sequence_map = IndexMap::with_capacity(sequences.len());
    for sequence in sequences {
        if sequence_map.contains_key(&sequence.name) {
            return Err(DuplicateSequenceNameError {
                name: sequence.name,
                path: path_string,
            }
            .into());
        }
        sequence_map.insert(sequence.name.clone(), sequence);
    }

    Ok(sequence_map)
}

/// Build a named sequence from residues supplied as a command line argument.
pub fn sequence_from_argument(name: &str, residues: &str) -> anyhow::Result<Sequence> {
    Ok(Sequence::from_utf8(residues.as_bytes())?.with_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};
    use std::io::Write;

    fn write_fasta(
        dir: &tempfile::TempDir,
        name: &str,
        contents: &str,
    ) -> anyhow::Result<std::path::PathBuf> {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path)?;
        write!(file, "{contents}")?;
        Ok(path)
    }

    #[test]
    fn test_read_sequences_in_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_fasta(&dir, "seqs.fa", ">zeta first\nAATG\n>alpha\nAA\nGT\n")?;

        let sequences = read_sequences(&path)?;
        let names: Vec<&String> = sequences.keys().collect();
        assert!(names == vec!["zeta", "alpha"]);
        assert!(sequences["alpha"].as_str() == "AAGT");
        assert!(sequences["zeta"].details.as_deref() == Some("first"));
        Ok(())
    }

    #[test]
    fn test_read_sequences_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_fasta(&dir, "empty.fa", "")?;

        let_assert!(Err(err) = read_sequences(&path));
        assert!(err.downcast_ref::<EmptySequenceFileError>().is_some());
        Ok(())
    }

    #[test]
    fn test_read_sequences_duplicate() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_fasta(&dir, "dup.fa", ">a\nAC\n>a\nGT\n")?;

        let_assert!(Err(err) = read_sequences(&path));
        let_assert!(Some(dup) = err.downcast_ref::<DuplicateSequenceNameError>());
        assert!(dup.name == "a");
        Ok(())
    }

    #[test]
    fn test_sequence_from_argument() -> anyhow::Result<()> {
        let sequence = sequence_from_argument("seq_1", "AATG")?;
        assert!(sequence.name == "seq_1");
        assert!(sequence.length == 4);

        assert!(sequence_from_argument("seq_1", "AA-G").is_err());
        assert!(sequence_from_argument("seq_1", "AA G").is_err());
        Ok(())
    }
}
