//! # Resolución de Paths
//! src/server/resolve.rs
//!
//! Traduce el path de la request line a un archivo bajo el document root y
//! carga su contenido.
//!
//! ```text
//! "/"          → "/index.html" → htdocs/index.html
//! "/docs/a.md" →                 htdocs/docs/a.md
//! ```
//!
//! Por defecto el join es literal: un `..` puede salir del document root.
//! Con `confine_to_root` esos paths se rechazan antes de tocar el disco.

use crate::error::RequestError;
use std::path::{Component, Path, PathBuf};

/// Archivo servido cuando se pide "/"
pub const INDEX_PATH: &str = "/index.html";

/// Opciones de resolución derivadas de la configuración
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Rechaza paths que suben por encima del document root
    pub confine_to_root: bool,
}

/// Destino de una petición, válido solo durante un ciclo de atención
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Path absoluto (léxico, sin resolver symlinks)
    pub absolute_path: PathBuf,

    pub is_directory: bool,
}

impl ResolvedTarget {
    /// Une el path pedido con el document root y consulta el sistema de archivos
    pub fn new(document_root: &Path, raw_path: &str) -> Self {
        let joined = document_root.join(strip_leading_slashes(normalize_path(raw_path)));
        let absolute_path = std::path::absolute(&joined).unwrap_or(joined);
        let is_directory = absolute_path.is_dir();

        Self {
            absolute_path,
            is_directory,
        }
    }

    /// Lee el archivo completo como texto UTF-8
    ///
    /// El contenido binario no es UTF-8 válido y termina en `InvalidData` (400).
    pub fn load(&self) -> Result<String, RequestError> {
        if self.is_directory {
            return Err(RequestError::IsADirectory(self.absolute_path.clone()));
        }

        let bytes = std::fs::read(&self.absolute_path)
            .map_err(|e| RequestError::from_io(e, self.absolute_path.clone()))?;

        String::from_utf8(bytes).map_err(|e| {
            RequestError::InvalidData(format!(
                "{} is not valid UTF-8: {}",
                self.absolute_path.display(),
                e.utf8_error()
            ))
        })
    }
}

/// "/" se reescribe a "/index.html"; cualquier otro path queda igual
pub fn normalize_path(raw_path: &str) -> &str {
    if raw_path == "/" {
        INDEX_PATH
    } else {
        raw_path
    }
}

/// Quita todas las barras iniciales para que el join nunca reemplace el root
fn strip_leading_slashes(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Verifica léxicamente que el path no suba por encima del root
fn stays_within_root(relative: &Path) -> bool {
    let mut depth: usize = 0;

    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}

/// Resuelve el path pedido a un archivo regular bajo el document root
///
/// # Errores
///
/// * `PermissionDenied` - con `confine_to_root`, el path sale del root
/// * `IsADirectory` - el destino es un directorio
///
/// # Ejemplo
///
/// ```no_run
/// use htdocs_server::server::resolve::{resolve, ResolveOptions};
/// use std::path::Path;
///
/// let target = resolve(Path::new("htdocs"), "/", ResolveOptions::default()).unwrap();
/// assert!(target.absolute_path.ends_with("htdocs/index.html"));
/// ```
pub fn resolve(
    document_root: &Path,
    raw_path: &str,
    options: ResolveOptions,
) -> Result<ResolvedTarget, RequestError> {
    if options.confine_to_root {
        let relative = Path::new(strip_leading_slashes(normalize_path(raw_path)));
        if !stays_within_root(relative) {
            return Err(RequestError::PermissionDenied(document_root.join(relative)));
        }
    }

    let target = ResolvedTarget::new(document_root, raw_path);

    if target.is_directory {
        return Err(RequestError::IsADirectory(target.absolute_path));
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docroot() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "hi").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("a.txt"), "alpha").unwrap();
        dir
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_path("/"), "/index.html");
        assert_eq!(normalize_path("/a.txt"), "/a.txt");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_resolve_index() {
        let dir = docroot();
        let target = resolve(dir.path(), "/", ResolveOptions::default()).unwrap();

        assert!(target.absolute_path.is_absolute());
        assert!(target.absolute_path.ends_with("index.html"));
        assert!(!target.is_directory);
        assert_eq!(target.load().unwrap(), "hi");
    }

    #[test]
    fn test_resolve_nested() {
        let dir = docroot();
        let target = resolve(dir.path(), "/docs/a.txt", ResolveOptions::default()).unwrap();
        assert_eq!(target.load().unwrap(), "alpha");
    }

    #[test]
    fn test_multiple_leading_slashes_stay_under_root() {
        let dir = docroot();
        let target = resolve(dir.path(), "//docs/a.txt", ResolveOptions::default()).unwrap();

        assert!(target.absolute_path.starts_with(dir.path()));
        assert_eq!(target.load().unwrap(), "alpha");
    }

    #[test]
    fn test_directory_rejected() {
        let dir = docroot();
        let result = resolve(dir.path(), "/docs", ResolveOptions::default());
        assert!(matches!(result, Err(RequestError::IsADirectory(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = docroot();
        let target = resolve(dir.path(), "/missing.txt", ResolveOptions::default()).unwrap();
        assert!(matches!(target.load(), Err(RequestError::NotFound(_))));
    }

    #[test]
    fn test_binary_content_is_invalid_data() {
        let dir = docroot();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let target = resolve(dir.path(), "/blob.bin", ResolveOptions::default()).unwrap();
        assert!(matches!(target.load(), Err(RequestError::InvalidData(_))));
    }

    #[test]
    fn test_nul_in_path_is_invalid_data() {
        let dir = docroot();
        let target = resolve(dir.path(), "/a\0b", ResolveOptions::default()).unwrap();

        assert!(!target.is_directory);
        assert!(matches!(target.load(), Err(RequestError::InvalidData(_))));
    }

    #[test]
    fn test_parent_dir_escapes_without_confinement() {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("htdocs");
        fs::create_dir(&root).unwrap();
        fs::write(outer.path().join("outside.txt"), "leak").unwrap();

        let target = resolve(&root, "/../outside.txt", ResolveOptions::default()).unwrap();
        assert_eq!(target.load().unwrap(), "leak");
    }

    #[test]
    fn test_parent_dir_blocked_with_confinement() {
        let dir = docroot();
        let options = ResolveOptions { confine_to_root: true };

        let result = resolve(dir.path(), "/../outside.txt", options);
        assert!(matches!(result, Err(RequestError::PermissionDenied(_))));

        let result = resolve(dir.path(), "/docs/../../x", options);
        assert!(matches!(result, Err(RequestError::PermissionDenied(_))));
    }

    #[test]
    fn test_parent_dir_inside_root_allowed_with_confinement() {
        let dir = docroot();
        let options = ResolveOptions { confine_to_root: true };

        let target = resolve(dir.path(), "/docs/../index.html", options).unwrap();
        assert_eq!(target.load().unwrap(), "hi");
    }

    #[test]
    fn test_stays_within_root() {
        assert!(stays_within_root(Path::new("a/b/c")));
        assert!(stays_within_root(Path::new("./a/../b")));
        assert!(!stays_within_root(Path::new("..")));
        assert!(!stays_within_root(Path::new("a/../../b")));
    }
}
