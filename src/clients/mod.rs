//! Clientes HTTP

pub mod sync_client;
