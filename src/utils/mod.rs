//! Utilidades compartidas

pub mod cookies;
pub mod errors;
pub mod validation;
