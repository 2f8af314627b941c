//! Lenient view of `/api/contact` response bodies.

use serde::Deserialize;

/// Response body of the contact endpoint.
///
/// Deployed backends answer in two shapes, `{"ok": true}` and
/// `{"status": "ok"}`; both are accepted. A body that fails to parse is
/// treated as the empty reply rather than an error, so a misbehaving
/// backend degrades into a rejection instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerReply {
    /// Success flag (newer backends)
    ok: Option<bool>,

    /// Success marker, "ok" on success (older backends)
    status: Option<String>,

    /// Failure message supplied by the server
    error: Option<String>,
}

impl ServerReply {
    /// Parse a response body, tolerating malformed JSON.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// True when the body signals success in either accepted shape.
    pub fn indicates_success(&self) -> bool {
        self.ok == Some(true) || self.status.as_deref() == Some("ok")
    }

    /// Server-supplied failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ok_flag_shape() {
        let reply = ServerReply::parse(r#"{"ok": true}"#);
        assert!(reply.indicates_success());

        let reply = ServerReply::parse(r#"{"ok": false}"#);
        assert!(!reply.indicates_success());
    }

    #[test]
    fn test_accepts_status_marker_shape() {
        let reply = ServerReply::parse(r#"{"status": "ok"}"#);
        assert!(reply.indicates_success());

        let reply = ServerReply::parse(r#"{"status": "error"}"#);
        assert!(!reply.indicates_success());
    }

    #[test]
    fn test_carries_server_error_message() {
        let reply = ServerReply::parse(r#"{"ok": false, "error": "mailbox unavailable"}"#);
        assert_eq!(reply.error_message(), Some("mailbox unavailable"));
        assert!(!reply.indicates_success());
    }

    #[test]
    fn test_malformed_body_is_empty_reply() {
        for body in ["", "not json", "<html>502</html>", "[1, 2, 3]"] {
            let reply = ServerReply::parse(body);
            assert!(!reply.indicates_success(), "body {:?}", body);
            assert_eq!(reply.error_message(), None);
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let reply = ServerReply::parse(r#"{"ok": true, "id": "abc-123", "queued": 1}"#);
        assert!(reply.indicates_success());
    }
}
