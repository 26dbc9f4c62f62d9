pub mod client;
pub mod prompt;
pub mod requester;
pub mod settings;
pub mod types;
