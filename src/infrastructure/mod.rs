pub mod inference;
pub mod media;
pub mod observability;
pub mod persistence;
