//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración inmutable del proceso: se construye una vez al arrancar
//! (CLI + variables de entorno) y se pasa por referencia al aceptador y al
//! handler. No hay recarga en caliente.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./htdocs_server --port 8080 --document-root ./public
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 DOCUMENT_ROOT=./public ./htdocs_server
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Parser)]
#[command(name = "htdocs_server")]
#[command(about = "Servidor de archivos HTTP/1.0 minimo, una conexion a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8000", env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio desde el que se sirven los archivos (relativo al cwd)
    #[arg(short, long = "document-root", default_value = "htdocs", env = "DOCUMENT_ROOT")]
    pub document_root: PathBuf,

    /// Nivel de log por defecto (RUST_LOG tiene prioridad si está definido)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Rechaza con 403 los paths cuyo `..` sale del document root
    #[arg(long = "confine-to-root", env = "CONFINE_TO_ROOT")]
    pub confine_to_root: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use htdocs_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.document_root.as_os_str().is_empty() {
            return Err("Document root must not be empty".to_string());
        }

        if self.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.address(),
            document_root = %self.document_root.display(),
            confine_to_root = self.confine_to_root,
            "configuration loaded"
        );

        if !self.document_root.is_dir() {
            tracing::warn!(
                "Document root {} is not a directory; every request will get 404",
                self.document_root.display()
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            document_root: PathBuf::from("htdocs"),
            log_level: "info".to_string(),
            confine_to_root: false,
        }
    }
}
