//! # HTDocs Server
//! src/lib.rs
//!
//! Servidor de archivos mínimo que habla un subconjunto de HTTP/1.0:
//! acepta una conexión TCP, parsea la request line, resuelve el path bajo
//! un document root fijo y devuelve el archivo o un código de error.
//!
//! ## Arquitectura
//!
//! - `config`: Configuración inmutable (CLI + variables de entorno)
//! - `error`: Errores de arranque y tipos de falla de una petición
//! - `http`: Request line, responses y códigos de estado
//! - `server`: Aceptador TCP secuencial y handler de peticiones
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use htdocs_server::config::Config;
//! use htdocs_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod server;
