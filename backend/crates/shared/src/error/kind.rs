//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Declares the enum plus its status-code and reason-phrase tables in one
/// place, so a new kind cannot be added with a missing mapping.
macro_rules! error_kinds {
    ($( $(#[$doc:meta])* $variant:ident => ($status:expr, $phrase:expr), )+) => {
        /// Error classification mapped to RFC 7231/9110 status codes.
        ///
        /// Every error surfaced by a service boundary falls into one of these
        /// kinds; handlers never invent status codes of their own.
        ///
        /// ## Examples
        /// ```rust
        /// use kernel::error::kind::ErrorKind;
        ///
        /// let kind = ErrorKind::NotFound;
        /// assert_eq!(kind.status_code(), 404);
        /// assert_eq!(kind.as_str(), "Not Found");
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum ErrorKind {
            $( $(#[$doc])* $variant, )+
        }

        impl ErrorKind {
            /// HTTP status code for this kind.
            #[inline]
            pub const fn status_code(&self) -> u16 {
                match self {
                    $( ErrorKind::$variant => $status, )+
                }
            }

            /// Standard reason phrase for this kind.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $phrase, )+
                }
            }
        }

        #[cfg(test)]
        const ALL_KINDS: &[(ErrorKind, u16, &str)] =
            &[ $( (ErrorKind::$variant, $status, $phrase), )+ ];
    };
}

error_kinds! {
    /// 400 - malformed or self-contradictory request
    /// (covers invalid operations such as a self-follow)
    BadRequest => (400, "Bad Request"),
    /// 401 - missing, bad, or expired credentials
    Unauthorized => (401, "Unauthorized"),
    /// 403 - authenticated but not permitted
    Forbidden => (403, "Forbidden"),
    /// 404 - referenced entity does not exist
    NotFound => (404, "Not Found"),
    /// 409 - uniqueness or duplicate-relationship violation
    Conflict => (409, "Conflict"),
    /// 413 - upload exceeds the size cap
    PayloadTooLarge => (413, "Payload Too Large"),
    /// 415 - file type not on the whitelist
    UnsupportedMediaType => (415, "Unsupported Media Type"),
    /// 422 - well-formed but semantically invalid
    UnprocessableEntity => (422, "Unprocessable Entity"),
    /// 500 - unexpected store/infra failure
    InternalServerError => (500, "Internal Server Error"),
    /// 503 - dependency temporarily unreachable
    ServiceUnavailable => (503, "Service Unavailable"),
}

impl ErrorKind {
    /// True for 5xx kinds. These should be logged.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// True for 4xx kinds.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_phrase_tables_agree() {
        for (kind, status, phrase) in ALL_KINDS {
            assert_eq!(kind.status_code(), *status, "{kind:?}");
            assert_eq!(kind.as_str(), *phrase, "{kind:?}");
            assert_eq!(kind.to_string(), *phrase);
        }
    }

    #[test]
    fn test_error_classes_partition() {
        for (kind, status, _) in ALL_KINDS {
            assert_eq!(kind.is_server_error(), *status >= 500, "{kind:?}");
            assert_eq!(kind.is_client_error(), *status < 500, "{kind:?}");
            assert_ne!(kind.is_server_error(), kind.is_client_error());
        }
    }
}
