//! DTO modules that bridge the HTTP surface with the service layer.

pub mod grid;
