use std::path::PathBuf;
use std::time::Duration;

use tinyhttpd::config::{Config, LISTEN_ENV};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8888");
    assert_eq!(cfg.server.backlog, 5);
    assert_eq!(cfg.server.read_buffer_size, 1024);
    assert_eq!(cfg.server.read_timeout(), None);
    assert!(!cfg.server.concurrent);
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
    assert_eq!(cfg.static_files.index, "index.html");
    assert_eq!(cfg.headers.server, "The Ultimate Super Server");
    assert_eq!(cfg.headers.content_type, "text/html");
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str(
        "server:\n  listen_addr: \"0.0.0.0:3000\"\n  read_timeout_ms: 2500\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.read_timeout(), Some(Duration::from_millis(2500)));
    assert_eq!(cfg.server.backlog, 5);
    assert_eq!(cfg.static_files.index, "index.html");
}

#[test]
fn test_config_full_yaml() {
    let raw = r#"
server:
  listen_addr: "127.0.0.1:9000"
  backlog: 16
  read_buffer_size: 4096
  concurrent: true
static_files:
  root: "/srv/www"
  index: "home.html"
headers:
  server: "tiny/0.1"
  content_type: "text/plain"
"#;
    let cfg = Config::from_yaml_str(raw).unwrap();

    assert_eq!(cfg.server.backlog, 16);
    assert_eq!(cfg.server.read_buffer_size, 4096);
    assert!(cfg.server.concurrent);
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.index, "home.html");
    assert_eq!(cfg.headers.server, "tiny/0.1");
    assert_eq!(cfg.headers.content_type, "text/plain");
}

#[test]
fn test_config_rejects_zero_buffer() {
    let result = Config::from_yaml_str("server:\n  read_buffer_size: 0\n");

    assert!(result.is_err());
}

#[test]
fn test_config_rejects_malformed_yaml() {
    assert!(Config::from_yaml_str("server: [unclosed").is_err());
    assert!(Config::from_yaml_str("server:\n  backlog: lots\n").is_err());
}

#[test]
fn test_config_missing_file_is_error() {
    let result = Config::from_file("/definitely/not/here/tinyhttpd.yaml");

    assert!(result.is_err());
}

#[test]
fn test_config_listen_env_override() {
    // When LISTEN env var is set, it wins over defaults
    unsafe {
        std::env::set_var(LISTEN_ENV, "0.0.0.0:5000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:5000");
    unsafe {
        std::env::remove_var(LISTEN_ENV);
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8888");
}
