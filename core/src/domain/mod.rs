pub mod common;
pub mod plant_care;
