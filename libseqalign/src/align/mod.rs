pub mod structs;

mod fill;
pub use fill::{fill_cell, select_step};

mod unrestricted;
pub use unrestricted::unrestricted;

mod banded;
pub use banded::banded;

mod traceback;
pub use traceback::{traceback, MissingBackPointerError};

mod aligner;
pub use aligner::{align, Aligner};
