use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use mcp_tidal::TidalClient;

/// Shared environment for tests that talk to a live backing TIDAL service.
#[allow(dead_code)]
pub struct TestEnvironment {
    pub api_url: String,
    pub client: TidalClient,
}

impl TestEnvironment {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let api_url = ServiceEnvironment::api_url();
        let client = TidalClient::new(api_url.clone());
        Self { api_url, client }
    }
}

/// Reachability checks for the backing TIDAL service. Live tests skip
/// themselves when the service is not running rather than failing.
pub struct ServiceEnvironment;

impl ServiceEnvironment {
    pub fn api_url() -> String {
        std::env::var("TIDAL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5050".to_string())
    }

    pub fn is_running() -> bool {
        let url = Self::api_url();
        let host = url
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        let host = host.split('/').next().unwrap_or(host);

        let mut addrs = match host.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(_) => return false,
        };

        addrs.any(|addr| TcpStream::connect_timeout(&addr, Duration::from_secs(2)).is_ok())
    }

    /// Returns true when the live test should be skipped.
    #[allow(dead_code)]
    pub fn skip_unless_running(test_name: &str) -> bool {
        if Self::is_running() {
            false
        } else {
            eprintln!(
                "Skipping {}: backing TIDAL service not reachable at {}",
                test_name,
                Self::api_url()
            );
            true
        }
    }
}

#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
