use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which portion of the cost matrix is searched for the optimal alignment.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlignMode {
    /// Every cell of the matrix is computed.
    #[default]
    Unrestricted,
    /// Only the cells within the band radius of the main diagonal are computed.
    Banded,
}

impl AlignMode {
    pub fn from_banded_flag(banded: bool) -> Self {
        match banded {
            true => AlignMode::Banded,
            false => AlignMode::Unrestricted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;
    use std::str::FromStr;

    #[test]
    fn test_align_mode_names() -> anyhow::Result<()> {
        assert!(AlignMode::Banded.to_string() == "banded");
        assert!(AlignMode::from_str("unrestricted")? == AlignMode::Unrestricted);
        assert!(AlignMode::from_banded_flag(true) == AlignMode::Banded);
        assert!(AlignMode::from_banded_flag(false) == AlignMode::default());
        Ok(())
    }
}
