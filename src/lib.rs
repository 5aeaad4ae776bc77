//! Client and characterization suite for the PetFriends pet-management API.
//!
//! The crate wraps the handful of PetFriends endpoints (auth key, list,
//! create with and without photo, set photo, update, delete) in a thin
//! [`api::Client`]. Each call is one HTTP round trip returning the status and
//! the decoded body, so the test suite can assert on exactly what the service
//! answered, including the 403s it sends for bad credentials.
//!
//! # Example
//!
//! ```no_run
//! use petfriends::{AuthKey, Client, PetFilter, PetList, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let client = Client::from_settings(&settings)?;
//!
//! let response = client
//!     .get_api_key(&settings.valid_email, &settings.valid_password)
//!     .await?;
//! let auth_key = AuthKey::from_response(&response).ok_or("login failed")?;
//!
//! let pets: PetList = client
//!     .get_list_of_pets(&auth_key, PetFilter::MyPets)
//!     .await?
//!     .decode()?;
//! println!("{} pets", pets.pets.len());
//! # Ok(())
//! # }
//! ```

use std::net::IpAddr;
use std::time::Duration;

pub mod api;
pub mod error;
pub mod settings;
pub mod types;

pub use api::Client;
pub use error::Error;
pub use settings::{Settings, SettingsError};
pub use types::{ApiResponse, AuthKey, Pet, PetFilter, PetList, ResponseBody};

pub use reqwest::StatusCode;

/// HTTP client options.
///
/// Everything left unset keeps the defaults of the underlying HTTP library;
/// in particular there is no request timeout unless one is given here.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use petfriends::HttpClientConfig;
///
/// let config = HttpClientConfig::new().timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Total timeout for each request.
    pub timeout: Option<Duration>,
    /// Local address to bind outgoing connections to.
    pub local_address: Option<IpAddr>,
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }
}
