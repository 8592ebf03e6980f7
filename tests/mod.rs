pub mod boundary;
pub mod require;
pub mod types;


#[cfg(feature = "serde")]
pub mod serialize;
