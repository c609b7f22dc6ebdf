mod align_mode;
pub use align_mode::AlignMode;

mod alignment;
pub use alignment::{Alignment, AlignmentBuilder, DISPLAY_LENGTH, NO_ALIGNMENT};

mod cost;
pub use cost::{Cost, CostOutOfRangeError};

mod cost_model;
pub use cost_model::{CostModel, BAND_RADIUS, INDEL_COST, MATCH_COST, SUBSTITUTE_COST};

mod cost_matrix;
pub use cost_matrix::CostMatrix;

mod cost_matrix_flat;
pub use cost_matrix_flat::CostMatrixFlat;

mod cost_matrix_banded;
pub use cost_matrix_banded::CostMatrixBanded;

mod row_bounds;
pub use row_bounds::RowBounds;

mod trace;
pub use trace::{Trace, TraceStep, GAP};
