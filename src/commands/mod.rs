pub mod analysis;
pub mod survey;
