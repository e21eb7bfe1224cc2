//! Environment variable parsing with warn-and-default behavior
//!
//! An unparseable PORT should not abort a deployment; it warns and keeps the
//! configured default, with the message sent to an injectable writer so the
//! behavior is testable.

use std::io::Write;

/// Parse a PORT value, warning and returning `default` if it is not a valid
/// non-zero port number.
pub fn parse_port(value: &str, default: u16) -> u16 {
    parse_port_with_writer(value, default, &mut std::io::stderr())
}

/// Parse with a custom writer (for testing)
pub fn parse_port_with_writer<W: Write>(value: &str, default: u16, writer: &mut W) -> u16 {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            let _ = writeln!(
                writer,
                "Warning: Invalid PORT value '{}', using {}",
                value, default
            );
            let _ = writeln!(writer, "Valid values: 1-65535");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        let mut out = Vec::new();
        assert_eq!(parse_port_with_writer("3000", 8000, &mut out), 3000);
        assert!(out.is_empty(), "no warning for valid port");
    }

    #[test]
    fn test_parse_port_trims_whitespace() {
        let mut out = Vec::new();
        assert_eq!(parse_port_with_writer(" 5000 ", 8000, &mut out), 5000);
    }

    #[test]
    fn test_parse_port_garbage_falls_back() {
        let mut out = Vec::new();
        assert_eq!(parse_port_with_writer("eight-thousand", 8000, &mut out), 8000);

        let msg = String::from_utf8(out).unwrap();
        assert!(msg.contains("Warning:"), "should warn: {}", msg);
        assert!(msg.contains("eight-thousand"), "should echo value: {}", msg);
        assert!(msg.contains("8000"), "should mention fallback: {}", msg);
    }

    #[test]
    fn test_parse_port_zero_falls_back() {
        let mut out = Vec::new();
        assert_eq!(parse_port_with_writer("0", 8000, &mut out), 8000);
    }

    #[test]
    fn test_parse_port_out_of_range_falls_back() {
        let mut out = Vec::new();
        assert_eq!(parse_port_with_writer("70000", 8000, &mut out), 8000);
    }
}
