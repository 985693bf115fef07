//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.0 que habla el servidor de archivos:
//!
//! - Parsing de la request line (solo GET)
//! - Construcción de responses sin headers
//! - Códigos de estado de la tabla de mapeo
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.0\r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\n
//! \n
//! <contenido del archivo>
//! ```

pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Permite usar `http::Request` en vez de `http::request::Request`
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
