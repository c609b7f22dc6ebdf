pub mod output_standard;
pub mod output_tabular;
