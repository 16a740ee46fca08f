use filegate::http::parser::{fallback_version, parse_request_line, ParseError, DEFAULT_VERSION};
use filegate::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_keeps_target_raw() {
    let parsed = parse_request_line("GET /a%20b/../c?q=1 HTTP/1.0").unwrap();

    assert_eq!(parsed.target, "/a%20b/../c?q=1");
}

#[test]
fn test_parse_echoes_unknown_version() {
    let parsed = parse_request_line("HEAD / HTTP/9.9").unwrap();

    assert_eq!(parsed.version, "HTTP/9.9");
}

#[test]
fn test_parse_ignores_extra_tokens() {
    let parsed = parse_request_line("GET / HTTP/1.1 trailing junk").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_empty_line() {
    assert_eq!(parse_request_line(""), Err(ParseError::Empty));
    assert_eq!(parse_request_line("   "), Err(ParseError::Empty));
}

#[test]
fn test_parse_missing_parts() {
    assert_eq!(parse_request_line("GET"), Err(ParseError::MissingParts));
    assert_eq!(parse_request_line("GET /"), Err(ParseError::MissingParts));
    assert_eq!(parse_request_line("GET  HTTP/1.1"), Err(ParseError::MissingParts));
}

#[test]
fn test_parse_invalid_method_token() {
    let result = parse_request_line("GE(T / HTTP/1.1");

    assert_eq!(result, Err(ParseError::InvalidMethod("GE(T".to_string())));
}

#[test]
fn test_parse_unhandled_but_valid_methods() {
    let methods = vec![
        ("CONNECT", Method::CONNECT),
        ("OPTIONS", Method::OPTIONS),
        ("TRACE", Method::TRACE),
        ("PATCH", Method::PATCH),
        ("BREW", Method::Extension("BREW".to_string())),
    ];

    for (method_str, expected_method) in methods {
        let line = format!("{} / HTTP/1.1", method_str);
        let parsed = parse_request_line(&line).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_fallback_version() {
    assert_eq!(fallback_version("GE(T / HTTP/1.0"), "HTTP/1.0");
    assert_eq!(fallback_version("GET /"), DEFAULT_VERSION);
    assert_eq!(fallback_version(""), DEFAULT_VERSION);
}
