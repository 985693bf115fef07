//! # Request Handler
//! src/server/handler.rs
//!
//! Un solo ciclo por conexión:
//!
//! ```text
//! read (≤1024 bytes) → parse → resolve → load → response → send → close
//! ```
//!
//! Ninguna falla sale de aquí: toda rama termina en exactamente una
//! respuesta y la conexión se cierra al salir de [`handle`].

use crate::error::RequestError;
use crate::http::request::READ_BUFFER_SIZE;
use crate::http::{Request, Response};
use crate::server::resolve::{resolve, ResolveOptions};
use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::path::Path;
use tracing::{debug, error, info};

/// Atiende una conexión aceptada y la cierra
pub fn handle(mut stream: TcpStream, document_root: &Path, options: ResolveOptions) {
    let response = exchange(&mut stream, document_root, options);
    debug!(status = %response.status(), "response sent");

    // El peer pudo haber cerrado ya; no hay nada más que hacer en ese caso
    if let Err(e) = stream.shutdown(Shutdown::Both) {
        debug!("shutdown after response failed: {}", e);
    }
}

/// Lee un request del stream, escribe la respuesta y la retorna
///
/// Genérico sobre el stream para poder probarlo sin sockets.
pub fn exchange<S: Read + Write>(
    stream: &mut S,
    document_root: &Path,
    options: ResolveOptions,
) -> Response {
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    let response = match stream.read(&mut buffer) {
        Ok(bytes_read) => respond(&buffer[..bytes_read], document_root, options),
        Err(e) => failure_response(RequestError::Internal(format!("read failed: {}", e))),
    };

    if let Err(e) = stream.write_all(&response.to_bytes()).and_then(|_| stream.flush()) {
        error!("Error: failed to send response: {}", e);
    }

    response
}

/// Núcleo sin I/O de red: bytes recibidos → respuesta
///
/// # Ejemplo
///
/// ```no_run
/// use htdocs_server::server::handler::respond;
/// use htdocs_server::server::resolve::ResolveOptions;
/// use std::path::Path;
///
/// let response = respond(b"GET /missing.txt HTTP/1.0\r\n", Path::new("htdocs"), ResolveOptions::default());
/// assert_eq!(response.to_bytes(), b"HTTP/1.0 404 Not Found\n\nFile Not Found");
/// ```
pub fn respond(raw: &[u8], document_root: &Path, options: ResolveOptions) -> Response {
    info!("Client request:\n{}", String::from_utf8_lossy(raw));

    match serve(raw, document_root, options) {
        Ok(content) => Response::ok(content),
        Err(err) => failure_response(err),
    }
}

fn serve(raw: &[u8], document_root: &Path, options: ResolveOptions) -> Result<String, RequestError> {
    let request = Request::parse(raw)?;
    debug!("{} {} ({})", request.method(), request.path(), request.version());

    let target = resolve(document_root, request.path(), options)?;
    info!("Requested file path: {}", target.absolute_path.display());

    target.load()
}

/// Registra la falla y aplica la tabla de mapeo
fn failure_response(err: RequestError) -> Response {
    match &err {
        RequestError::NotFound(path) => error!("Error: File not found ({})", path.display()),
        RequestError::IsADirectory(path) => {
            error!("Error: File not found, {} is a directory", path.display())
        }
        RequestError::PermissionDenied(path) => {
            error!("Error: Permission denied ({})", path.display())
        }
        RequestError::Malformed(_)
        | RequestError::UnsupportedMethod(_)
        | RequestError::InvalidData(_) => error!("Error: Bad request {}", err),
        RequestError::Internal(_) => error!("Error: {}", err),
    }

    Response::from(&err)
}
