use serde::{Serialize, Deserialize};
use std::net::{IpAddr, SocketAddr};

pub const REAL_IP_HEADER: &str = "X-Real-IP";
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Best-effort identity of whoever sent a request.
///
/// This is derived from headers the client controls, so it only stops
/// accidental double voting. It is not an access control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterInfo {
    pub ip: Option<String>,
    pub voter_fingerprint: Option<String>,
}

impl VoterInfo {
    pub fn from_sources(real_ip: Option<&str>, forwarded_for: Option<&str>, remote: Option<SocketAddr>) -> Self {
        let ip = client_address(real_ip, forwarded_for, remote);
        let voter_fingerprint = ip.as_deref().map(generate_voter_fingerprint);
        Self { ip, voter_fingerprint }
    }
}

/// Picks the client address: proxy header, then the first forwarded hop,
/// then the socket peer. Blank headers are skipped.
pub fn client_address(real_ip: Option<&str>, forwarded_for: Option<&str>, remote: Option<SocketAddr>) -> Option<String> {
    real_ip
        .and_then(normalize_address)
        .or_else(|| forwarded_for
            .and_then(|list| list.split(',').next())
            .and_then(normalize_address))
        .or_else(|| remote.map(|addr| addr.ip().to_string()))
}

/// Trims whitespace and drops a trailing `:port`, keeping bare IPv6 intact.
pub fn normalize_address(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Some(addr.ip().to_string());
    }
    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Some(ip.to_string());
    }

    // Hostnames or other opaque tokens: only strip a single port suffix.
    let host = match raw.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => raw,
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    (!host.is_empty()).then(|| host.to_string())
}

pub fn generate_voter_fingerprint(ip: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use sha2::{Sha256, Digest};

    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    URL_SAFE.encode(hasher.finalize())
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for VoterInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            Outcome::Success(VoterInfo::from_sources(
                headers.get_one(REAL_IP_HEADER),
                headers.get_one(FORWARDED_FOR_HEADER),
                req.remote(),
            ))
        }
    }
}
