//! HTTP handlers for medscribe-api.

pub mod describe;
pub mod root;

pub use describe::describe_medicine;
pub use root::root;
