pub mod listing;
pub mod ops;
pub mod permissions;
