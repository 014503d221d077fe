pub mod chart;
pub mod style;
pub mod table;
