use std::time::Duration;

use filegate::config::Config;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_config_from_single_port_argument() {
    let cfg = Config::from_args(args(&["3000"])).unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_args(args(&["8080"])).unwrap();

    assert_eq!(cfg.document_root, std::path::PathBuf::from("."));
    assert_eq!(cfg.default_document, "index.html");
    assert_eq!(cfg.reserved_dir, "src");
    assert_eq!(cfg.body_timeout, Duration::from_secs(5));
    assert!(cfg.server_name.starts_with("filegate/"));
}

#[test]
fn test_config_rejects_missing_argument() {
    assert!(Config::from_args(args(&[])).is_err());
}

#[test]
fn test_config_rejects_extra_arguments() {
    assert!(Config::from_args(args(&["8080", "9090"])).is_err());
}

#[test]
fn test_config_rejects_non_numeric_port() {
    assert!(Config::from_args(args(&["http"])).is_err());
    assert!(Config::from_args(args(&["70000"])).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::from_args(args(&["8000"])).unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
