//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! Solo interesa la primera línea del request; los headers y el body se
//! ignoran por completo.
//!
//! ```text
//! GET /index.html HTTP/1.0\r\n
//! Host: localhost:8000\r\n
//! \r\n
//! ```
//!
//! El request se lee con un único `read` de hasta [`READ_BUFFER_SIZE`] bytes.
//! Una request line más larga que el buffer queda truncada y no se
//! reensambla.

use crate::error::RequestError;

/// Tamaño máximo del único `read` que se hace por conexión
pub const READ_BUFFER_SIZE: usize = 1024;

/// Único método soportado (comparación exacta, sensible a mayúsculas)
pub const SUPPORTED_METHOD: &str = "GET";

/// Request HTTP parseado a partir de la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP tal como llegó (siempre "GET" tras un parse exitoso)
    method: String,

    /// Path sin decodificar (ej: "/docs/a.txt")
    path: String,

    /// Tercer token de la request line; no se valida
    version: String,
}

impl Request {
    /// Parsea un request desde los bytes recibidos
    ///
    /// # Errores
    ///
    /// * `Malformed` - los bytes no son UTF-8 válido, o la primera línea no
    ///   tiene exactamente 3 tokens
    /// * `UnsupportedMethod` - el método no es exactamente "GET"
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use htdocs_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /index.html HTTP/1.0\r\n\r\n").unwrap();
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, RequestError> {
        let text = std::str::from_utf8(buffer)
            .map_err(|e| RequestError::Malformed(format!("request is not valid UTF-8: {}", e)))?;

        // `split` siempre produce al menos un elemento, aunque el texto esté vacío
        let first_line = text.split('\n').next().unwrap_or_default();

        let request = Self::parse_request_line(first_line)?;

        if request.method != SUPPORTED_METHOD {
            return Err(RequestError::UnsupportedMethod(request.method));
        }

        Ok(request)
    }

    /// Formato: `METHOD PATH VERSION`
    fn parse_request_line(line: &str) -> Result<Self, RequestError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Menos de 2 tokens nunca es un request; 2 o más de 3 tampoco
        if parts.len() != 3 {
            return Err(RequestError::Malformed(line.trim_end().to_string()));
        }

        Ok(Request {
            method: parts[0].to_string(),
            path: parts[1].to_string(),
            version: parts[2].to_string(),
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
