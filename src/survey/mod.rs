pub mod form;
pub mod rules;
pub mod types;
