//! # Errores del Servidor
//! src/error.rs
//!
//! Dos familias de errores:
//!
//! - [`ServerError`]: fallas del socket de escucha. Un error de bind es fatal
//!   al arrancar; el resto se registra y el loop de accept sigue vivo.
//! - [`RequestError`]: fallas de una sola petición. Nunca salen del handler,
//!   siempre se convierten en una respuesta HTTP con la tabla de mapeo.

use crate::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errores del aceptador de conexiones
#[derive(Error, Debug)]
pub enum ServerError {
    /// No se pudo crear, enlazar o poner a escuchar el socket
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// La dirección configurada no resolvió a ningún socket
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tipos de falla de una petición individual
#[derive(Error, Debug)]
pub enum RequestError {
    /// Request que no es UTF-8 o cuya request line no es METHOD PATH VERSION
    #[error("Invalid HTTP request format: {0:?}")]
    Malformed(String),

    /// Cualquier método distinto de GET
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Contenido que no decodifica como texto o path inválido para el SO
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Los directorios nunca se listan ni se sirven
    #[error("Requested path is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Falla inesperada (error de I/O desconocido, read fallido, etc.)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RequestError {
    /// Código de estado que corresponde a este tipo de falla
    ///
    /// # Ejemplo
    /// ```
    /// use htdocs_server::error::RequestError;
    /// use htdocs_server::http::StatusCode;
    ///
    /// let err = RequestError::UnsupportedMethod("POST".to_string());
    /// assert_eq!(err.status(), StatusCode::BadRequest);
    /// ```
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::NotFound(_) | RequestError::IsADirectory(_) => StatusCode::NotFound,
            RequestError::PermissionDenied(_) => StatusCode::Forbidden,
            RequestError::Malformed(_)
            | RequestError::UnsupportedMethod(_)
            | RequestError::InvalidData(_) => StatusCode::BadRequest,
            RequestError::Internal(_) => StatusCode::InternalServerError,
        }
    }

    /// Body fijo en texto plano que ve el cliente
    pub fn body(&self) -> &'static str {
        match self.status() {
            StatusCode::NotFound => "File Not Found",
            StatusCode::Forbidden => "Permission Denied",
            StatusCode::BadRequest => "Bad Request",
            _ => "Internal Server Error",
        }
    }

    /// Clasifica un error de I/O del sistema de archivos
    pub fn from_io(err: std::io::Error, path: PathBuf) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RequestError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => RequestError::PermissionDenied(path),
            // Ej: un NUL dentro del path
            std::io::ErrorKind::InvalidInput => {
                RequestError::InvalidData(format!("{}: {}", path.display(), err))
            }
            _ => RequestError::Internal(format!("{}: {}", path.display(), err)),
        }
    }
}
