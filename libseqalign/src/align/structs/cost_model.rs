use serde::{Deserialize, Serialize};

/// The cost of aligning two identical residues
pub const MATCH_COST: i64 = -3;
/// The cost of aligning two different residues
pub const SUBSTITUTE_COST: i64 = 1;
/// The cost of a single insertion or deletion
pub const INDEL_COST: i64 = 5;
/// The largest offset between the rows and columns visited in banded mode
pub const BAND_RADIUS: usize = 3;

/// The flat match/substitute/indel cost model, plus the band half-width used in banded mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    pub match_cost: i64,
    pub substitute_cost: i64,
    pub indel_cost: i64,
    pub band_radius: usize,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            match_cost: MATCH_COST,
            substitute_cost: SUBSTITUTE_COST,
            indel_cost: INDEL_COST,
            band_radius: BAND_RADIUS,
        }
    }
}

impl CostModel {
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i64 {
        if a == b {
            self.match_cost
        } else {
            self.substitute_cost
        }
    }
}
