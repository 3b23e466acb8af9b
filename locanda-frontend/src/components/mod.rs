pub mod errors;
pub mod header;
pub mod locations;
