//! # Aceptador de Conexiones
//! src/server/tcp.rs
//!
//! Servidor TCP estrictamente secuencial: se acepta una conexión, se atiende
//! en el mismo thread y recién entonces se vuelve a `accept`. El backlog es
//! 1, así que mientras una petición está en curso los clientes extra pueden
//! ser rechazados por el sistema operativo en lugar de encolarse.
//!
//! No hay timeouts: un cliente que conecta y nunca envía datos bloquea al
//! servidor completo. Solo [`ShutdownHandle::shutdown`] lo destraba, cerrando
//! la conexión en curso.

use crate::config::Config;
use crate::error::ServerError;
use crate::server::handler;
use crate::server::resolve::ResolveOptions;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{
    IpAddr, Ipv4Addr, Ipv6Addr, Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, warn};

/// Conexiones pendientes sin aceptar que admite el socket
pub const LISTEN_BACKLOG: i32 = 1;

/// Servidor HTTP/1.0 de archivos, una conexión a la vez
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    document_root: PathBuf,
    options: ResolveOptions,
    stop: Arc<AtomicBool>,
    in_flight: Arc<Mutex<Option<TcpStream>>>,
}

/// Permite detener [`Server::run`] desde otro thread (ej: el handler de Ctrl+C)
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    stop: Arc<AtomicBool>,
    in_flight: Arc<Mutex<Option<TcpStream>>>,
    wake_addr: SocketAddr,
}

impl Server {
    /// Crea el socket, activa SO_REUSEADDR, hace bind y listen(1)
    ///
    /// Cualquier falla aquí es fatal: el proceso no debe seguir con un
    /// socket roto.
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        let address = config.address();

        let addr = address
            .to_socket_addrs()
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| ServerError::InvalidAddress(address.clone()))?;

        let listener = Self::listen(addr).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

        let local_addr = listener.local_addr()?;
        info!("Listening on port {} ...", local_addr.port());

        Ok(Self {
            listener,
            local_addr,
            document_root: config.document_root.clone(),
            options: ResolveOptions {
                confine_to_root: config.confine_to_root,
            },
            stop: Arc::new(AtomicBool::new(false)),
            in_flight: Arc::new(Mutex::new(None)),
        })
    }

    fn listen(addr: SocketAddr) -> std::io::Result<TcpListener> {
        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(LISTEN_BACKLOG)?;
        Ok(socket.into())
    }

    /// Dirección real del socket (útil al hacer bind al puerto 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stop: Arc::clone(&self.stop),
            in_flight: Arc::clone(&self.in_flight),
            wake_addr: wake_address(self.local_addr),
        }
    }

    /// Loop de accept; solo retorna después de un [`ShutdownHandle::shutdown`]
    ///
    /// Los errores de accept o de una conexión se registran y el loop sigue.
    pub fn run(&self) {
        info!("Serving files from {}", self.document_root.display());

        for stream in self.listener.incoming() {
            if self.stop.load(Ordering::SeqCst) {
                debug!("shutdown requested, leaving accept loop");
                break;
            }

            match stream {
                Ok(stream) => self.serve(stream),
                Err(e) => error!("Error: failed to accept connection: {}", e),
            }
        }
    }

    fn serve(&self, stream: TcpStream) {
        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        debug!("accepted connection from {}", peer_addr);

        match stream.try_clone() {
            Ok(clone) => *self.lock_in_flight() = Some(clone),
            Err(e) => warn!("could not register in-flight connection: {}", e),
        }

        // Un shutdown que llegó antes de registrar la conexión no la vio
        if !self.stop.load(Ordering::SeqCst) {
            handler::handle(stream, &self.document_root, self.options);
        }

        self.lock_in_flight().take();
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, Option<TcpStream>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cierra el socket de escucha
    ///
    /// Consume el servidor, así que no se puede cerrar dos veces.
    pub fn shutdown(self) {
        info!("Closing listening socket on {}", self.local_addr);
        drop(self.listener);
    }
}

impl ShutdownHandle {
    /// Marca el servidor para detenerse, corta la conexión en curso y
    /// desbloquea el `accept`
    ///
    /// Idempotente: llamadas repetidas no hacen nada nuevo.
    pub fn shutdown(&self) {
        if self.stop.swap(true, Ordering::SeqCst) {
            return;
        }

        // Un cliente silencioso deja al handler bloqueado en `read`
        let in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(stream) = in_flight.as_ref() {
            if let Err(e) = stream.shutdown(Shutdown::Both) {
                debug!("in-flight connection already closed: {}", e);
            }
        }
        drop(in_flight);

        // Una conexión descartable despierta al accept bloqueado
        if let Err(e) = TcpStream::connect(self.wake_addr) {
            warn!("could not wake accept loop at {}: {}", self.wake_addr, e);
        }
    }
}

/// Un socket en 0.0.0.0/:: no es conectable; se usa loopback en su lugar
fn wake_address(local: SocketAddr) -> SocketAddr {
    match local.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), local.port())
        }
        IpAddr::V6(ip) if ip.is_unspecified() => {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), local.port())
        }
        _ => local,
    }
}
