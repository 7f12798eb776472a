//! Static file server for the Coffee Fund page
//!
//! Serves the Trunk build output. Unknown paths fall back to index.html so
//! client-side routes survive a reload.
//!
//! Environment:
//! - `COFFEE_SERVER_ADDR` listen address (default `127.0.0.1:8080`)
//! - `COFFEE_DIST_DIR` directory to serve (default `dist`)

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST_DIR: &str = "dist";
const INDEX: &str = "index.html";
const NOT_FOUND_PAGE: &[u8] =
    b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerConfig {
    addr: SocketAddr,
    dist_dir: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let addr = lookup("COFFEE_SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| "COFFEE_SERVER_ADDR must be a socket address like 127.0.0.1:8080")?;

        let dist_dir = lookup("COFFEE_DIST_DIR")
            .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string())
            .into();

        Ok(Self { addr, dist_dir })
    }

    fn validate(&self) -> Result<(), String> {
        if !self.dist_dir.join(INDEX).is_file() {
            return Err(format!(
                "{} has no {}; run `trunk build` first",
                self.dist_dir.display(),
                INDEX
            ));
        }
        Ok(())
    }
}

fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let listener = match TcpListener::bind(config.addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.addr, e);
            std::process::exit(1);
        }
    };

    println!("Coffee Fund server running at http://{}", config.addr);
    println!("Serving from {}", config.dist_dir.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &config.dist_dir),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, dist_dir: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_path(dist_dir, target);

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type(&file_path)),
        Err(e) => {
            eprintln!("Cannot read {}: {}", file_path.display(), e);
            ("404 NOT FOUND", NOT_FOUND_PAGE.to_vec(), "text/html")
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }
    let _ = stream.flush();
}

/// File under `dist_dir` for a request target.
///
/// Query strings are ignored. Targets that try to leave `dist_dir`, name a
/// directory, or name a missing file resolve to index.html.
fn resolve_path(dist_dir: &Path, target: &str) -> PathBuf {
    let index = dist_dir.join(INDEX);
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let relative = Path::new(path.trim_start_matches('/'));

    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.as_os_str().is_empty() || escapes {
        return index;
    }

    let candidate = dist_dir.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn temp_dist(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("coffee-server-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::write(dir.join(INDEX), "<html></html>").unwrap();
        fs::write(dir.join("assets").join("app.wasm"), [0u8, 97, 115, 109]).unwrap();
        dir
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_config_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("COFFEE_SERVER_ADDR", "0.0.0.0:3000"),
            ("COFFEE_DIST_DIR", "/srv/coffee"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/coffee"));
    }

    #[test]
    fn test_config_rejects_bad_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("COFFEE_SERVER_ADDR", "localhost")])).unwrap_err();
        assert!(err.contains("COFFEE_SERVER_ADDR"));
    }

    #[test]
    fn test_validate_requires_index() {
        let dist = temp_dist("validate");
        let config = ServerConfig {
            addr: DEFAULT_ADDR.parse().unwrap(),
            dist_dir: dist.clone(),
        };
        assert!(config.validate().is_ok());

        let missing = ServerConfig {
            dist_dir: dist.join("nope"),
            ..config
        };
        assert!(missing.validate().is_err());
        let _ = fs::remove_dir_all(dist);
    }

    #[test]
    fn test_resolve_path() {
        let dist = temp_dist("resolve");
        let index = dist.join(INDEX);

        assert_eq!(resolve_path(&dist, "/"), index);
        assert_eq!(resolve_path(&dist, "/assets/app.wasm"), dist.join("assets/app.wasm"));
        assert_eq!(resolve_path(&dist, "/assets/app.wasm?v=2"), dist.join("assets/app.wasm"));
        // Client-side routes and directories
        assert_eq!(resolve_path(&dist, "/fund"), index);
        assert_eq!(resolve_path(&dist, "/assets"), index);
        // Traversal
        assert_eq!(resolve_path(&dist, "/../Cargo.toml"), index);
        assert_eq!(resolve_path(&dist, "/assets/../../etc/passwd"), index);
        let _ = fs::remove_dir_all(dist);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("coffee_web_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("coffee_web.js")), "application/javascript");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
