pub mod sequence;
pub use sequence::{InvalidSequenceByteError, Sequence};
