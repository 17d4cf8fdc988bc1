//! Canonicalization of user-supplied server addresses.

/// Port a Glances agent listens on unless the user says otherwise.
pub const DEFAULT_PORT: &str = "61209";

/// Canonicalize a user-supplied URL/port pair into `http://<host>:<port>`.
///
/// Tolerates both a bare host and a pasted full `http://host` string (even
/// with the prefix doubled), and a port already embedded in the URL, so
/// re-normalizing a canonical address is a no-op. An empty port falls back
/// to [`DEFAULT_PORT`].
pub fn normalize(url: &str, port: &str) -> Result<String, AddressError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AddressError::EmptyUrl);
    }

    let port = port.trim();
    if !port.is_empty() && port.parse::<i32>().is_err() {
        return Err(AddressError::InvalidPort(port.to_string()));
    }

    // Strip any pasted http:// prefixes; a single one is re-added below.
    let mut host = url;
    while let Some(rest) = host.strip_prefix("http://") {
        host = rest;
    }

    // Split off a trailing :port the user already typed. An explicit port
    // argument wins over it.
    let (host, embedded) = match host.rsplit_once(':') {
        Some((h, p)) if !h.is_empty() && !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => {
            (h, Some(p))
        }
        _ => (host, None),
    };

    if host.is_empty() {
        return Err(AddressError::EmptyUrl);
    }

    let port = if port.is_empty() {
        embedded.unwrap_or(DEFAULT_PORT)
    } else {
        port
    };

    Ok(format!("http://{}:{}", host, port))
}

/// Validate add-command input and produce the canonical address.
/// The registry accepts whatever it is handed; this is the only gate.
pub fn validate_input(nickname: &str, url: &str, port: &str) -> Result<String, AddressError> {
    if nickname.trim().is_empty() {
        return Err(AddressError::EmptyNickname);
    }
    normalize(url, port)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddressError {
    EmptyNickname,
    EmptyUrl,
    InvalidPort(String),
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::EmptyNickname => write!(f, "Server name must not be empty"),
            AddressError::EmptyUrl => write!(f, "Server URL must not be empty"),
            AddressError::InvalidPort(p) => write!(f, "Port '{}' is not a valid integer", p),
        }
    }
}

impl std::error::Error for AddressError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_scheme_and_default_port() {
        assert_eq!(normalize("host", "").unwrap(), "http://host:61209");
    }

    #[test]
    fn pasted_scheme_is_not_doubled() {
        assert_eq!(normalize("http://host", "").unwrap(), "http://host:61209");
        assert_eq!(normalize("http://http://host", "").unwrap(), "http://host:61209");
    }

    #[test]
    fn explicit_port_is_appended() {
        assert_eq!(normalize("host", "80").unwrap(), "http://host:80");
    }

    #[test]
    fn explicit_port_wins_over_embedded_port() {
        assert_eq!(normalize("http://host:61209", "80").unwrap(), "http://host:80");
    }

    #[test]
    fn normalize_is_idempotent() {
        let canonical = normalize("192.168.1.5", "8080").unwrap();
        assert_eq!(normalize(&canonical, "").unwrap(), canonical);

        let defaulted = normalize("http://host", "").unwrap();
        assert_eq!(normalize(&defaulted, "").unwrap(), defaulted);
    }

    #[test]
    fn non_integer_port_is_rejected() {
        assert_eq!(
            normalize("host", "abc"),
            Err(AddressError::InvalidPort("abc".to_string()))
        );
        assert!(normalize("host", "8080").is_ok());
    }

    #[test]
    fn empty_url_is_rejected() {
        assert_eq!(normalize("", "80"), Err(AddressError::EmptyUrl));
        assert_eq!(normalize("   ", ""), Err(AddressError::EmptyUrl));
        assert_eq!(normalize("http://", ""), Err(AddressError::EmptyUrl));
    }

    #[test]
    fn empty_nickname_is_rejected() {
        assert_eq!(
            validate_input("", "host", ""),
            Err(AddressError::EmptyNickname)
        );
        assert_eq!(
            validate_input("web", "host", "").unwrap(),
            "http://host:61209"
        );
    }
}
