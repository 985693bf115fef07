//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! 1. `tcp`: escucha en un puerto y acepta conexiones de a una
//! 2. `handler`: lee la request line y genera la respuesta
//! 3. `resolve`: traduce el path al archivo bajo el document root

pub mod handler;
pub mod resolve;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{Server, ShutdownHandle};
