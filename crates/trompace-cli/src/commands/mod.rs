pub mod config;
pub mod mutation;
pub mod token;
