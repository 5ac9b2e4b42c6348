//! Response specification type

use serde::de::DeserializeOwned;

use crate::request::Headers;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// The status the gateway treats as an authentication failure.
    pub const UNAUTHORIZED: Self = Self(401);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is a 4xx client error status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a 5xx server error status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.0 >= 500 && self.0 < 600
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            408 => "Request Timeout",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// HTTP response specification.
///
/// Carries whatever the transport received, for any status; the gateway
/// decides what a non-2xx status means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: Headers,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec`.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
        }
    }

    /// Returns true if the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as UTF-8 text, lossily.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_ranges() {
        assert!(StatusCode::new(200).is_success());
        assert!(StatusCode::new(204).is_success());
        assert!(!StatusCode::new(301).is_success());
        assert!(StatusCode::new(404).is_client_error());
        assert!(StatusCode::new(503).is_server_error());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StatusCode::new(401).to_string(), "401 Unauthorized");
        assert_eq!(StatusCode::UNAUTHORIZED.as_u16(), 401);
    }

    #[test]
    fn test_json_decoding() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Body {
            ok: u8,
        }

        let response = ResponseSpec::new(200, Headers::new(), br#"{"ok":1}"#.to_vec());
        assert!(response.is_success());
        assert_eq!(response.json::<Body>().unwrap(), Body { ok: 1 });
    }

    #[test]
    fn test_text_is_lossy() {
        let response = ResponseSpec::new(200, Headers::new(), vec![0xff, b'o', b'k']);
        assert!(response.text().ends_with("ok"));
    }
}
