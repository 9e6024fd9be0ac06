//! Static file serving module
//!
//! Maps a request path to a file under the document root and classifies
//! failures: a missing file is a 404, any other read failure is a 500
//! naming the underlying error code.

use crate::config::FilesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Why a file could not be served.
#[derive(Debug)]
pub enum ServeError {
    NotFound,
    Io(std::io::Error),
}

/// Serve the request path from the document root
pub async fn serve(ctx: &RequestContext<'_>, files: &FilesConfig) -> Response<Full<Bytes>> {
    match load_file(files, ctx.path).await {
        Ok((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            http::build_file_response(content, content_type, ctx.is_head)
        }
        Err(ServeError::NotFound) => http::build_404_response(),
        Err(ServeError::Io(e)) => {
            logger::log_error(&format!("Failed to read file for '{}': {e}", ctx.path));
            http::build_500_response(&io_error_code(&e))
        }
    }
}

/// Resolve a request path to a filesystem path under the document root.
/// The empty or root path maps to the configured index document.
#[must_use]
pub fn resolve_path(path: &str, files: &FilesConfig) -> PathBuf {
    let relative = path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        files.index_file.as_str()
    } else {
        relative
    };
    Path::new(&files.document_root).join(relative)
}

/// Load file bytes and infer the content type from the extension.
async fn load_file(
    files: &FilesConfig,
    path: &str,
) -> Result<(Vec<u8>, &'static str), ServeError> {
    let file_path = resolve_path(path, files);

    // Refuse paths that escape the document root. The canonicalize failure
    // for a missing file doubles as the 404 check.
    let root_canonical = match Path::new(&files.document_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root '{}' not accessible: {e}",
                files.document_root
            ));
            return Err(ServeError::NotFound);
        }
    };

    let file_canonical = match file_path.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ServeError::NotFound),
        Err(e) => return Err(ServeError::Io(e)),
    };

    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return Err(ServeError::NotFound);
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ServeError::NotFound),
        Err(e) => return Err(ServeError::Io(e)),
    };

    let extension = file_canonical
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let content_type = mime::get_content_type(extension.as_deref());

    Ok((content, content_type))
}

/// Human-readable code for the 500 body, e.g. `PermissionDenied (os error 13)`.
#[must_use]
pub fn io_error_code(error: &std::io::Error) -> String {
    match error.raw_os_error() {
        Some(code) => format!("{:?} (os error {code})", error.kind()),
        None => format!("{:?}", error.kind()),
    }
}
