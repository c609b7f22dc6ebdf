pub mod align;
pub mod output;
pub mod structs;
pub mod util;
