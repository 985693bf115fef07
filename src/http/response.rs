//! # Construcción de Respuestas HTTP
//!
//! Las respuestas no llevan headers: solo status line, una línea vacía y el
//! body.
//!
//! ```text
//! HTTP/1.0 404 Not Found\n
//! \n
//! File Not Found
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use htdocs_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok).with_body("hi");
//! assert_eq!(response.to_bytes(), b"HTTP/1.0 200 OK\n\nhi");
//! ```

use super::StatusCode;
use crate::error::RequestError;

/// Representa una respuesta HTTP/1.0 completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// 200 OK con el contenido del archivo
    pub fn ok(content: String) -> Self {
        Self {
            status: StatusCode::Ok,
            body: content.into_bytes(),
        }
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Formato: `HTTP/1.0 <code> <reason>\n\n<body>`
    pub fn to_bytes(&self) -> Vec<u8> {
        let status_line = format!("HTTP/1.0 {}\n\n", self.status);

        let mut result = Vec::with_capacity(status_line.len() + self.body.len());
        result.extend_from_slice(status_line.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl From<&RequestError> for Response {
    /// Aplica la tabla de mapeo: código fijo y body fijo por tipo de falla
    fn from(err: &RequestError) -> Self {
        Response::new(err.status()).with_body(err.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::ok("hi".to_string());
        assert_eq!(response.to_bytes(), b"HTTP/1.0 200 OK\n\nhi");
    }

    #[test]
    fn test_empty_body_response() {
        let text = String::from_utf8(Response::new(StatusCode::Ok).to_bytes()).unwrap();

        // Debe terminar con la línea vacía aunque no haya body
        assert_eq!(text, "HTTP/1.0 200 OK\n\n");
    }

    #[test]
    fn test_no_headers() {
        let text = String::from_utf8(Response::ok("x".repeat(10)).to_bytes()).unwrap();
        assert!(!text.contains("Content-Length"));
        assert!(!text.contains("Content-Type"));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_from_request_error() {
        let err = RequestError::NotFound(PathBuf::from("htdocs/missing.txt"));
        let response = Response::from(&err);

        assert_eq!(response.to_bytes(), b"HTTP/1.0 404 Not Found\n\nFile Not Found");
    }

    #[test]
    fn test_from_permission_error() {
        let err = RequestError::PermissionDenied(PathBuf::from("htdocs/secret"));
        assert_eq!(
            Response::from(&err).to_bytes(),
            b"HTTP/1.0 403 Forbidden\n\nPermission Denied"
        );
    }
}
