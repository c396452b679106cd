use std::net::{IpAddr, SocketAddr};

use super::ConfigError;

/// Trimmed value, or None when absent or blank
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Combine a bind host and port; "localhost" is accepted as 127.0.0.1
pub fn parse_bind_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let host = host.trim();
    let ip: IpAddr = if host.eq_ignore_ascii_case("localhost") {
        IpAddr::from([127, 0, 0, 1])
    } else {
        host.parse()
            .map_err(|_| ConfigError::InvalidBindAddress(host.to_string()))?
    };

    Ok(SocketAddr::new(ip, port))
}
