//! Low-level PetFriends API client.
//!
//! Every method performs exactly one HTTP request and hands back what the
//! service answered. Non-2xx statuses are returned as data, not errors, so
//! callers can assert on the 403s the service uses for bad credentials.
//!
//! # Endpoints
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `GET` | `/api/key` | headers `email`, `password` |
//! | `GET` | `/api/pets?filter=` | |
//! | `POST` | `/api/pets` | multipart with `pet_photo` |
//! | `POST` | `/api/create_pet_simple` | form |
//! | `POST` | `/api/pets/set_photo/{pet_id}` | multipart with `pet_photo` |
//! | `PUT` | `/api/pets/{pet_id}` | form |
//! | `DELETE` | `/api/pets/{pet_id}` | |

use std::path::Path;

use reqwest::header::HeaderValue;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use tracing::debug;

use crate::settings::Settings;
use crate::types::{ApiResponse, AuthKey, PetFilter, ResponseBody};
use crate::{Error, HttpClientConfig};

/// The public PetFriends deployment.
pub const PETFRIENDS_API_URL: &str = "https://petfriends.skillfactory.ru";

const AUTH_KEY_HEADER: &str = "auth_key";

/// PetFriends API client.
///
/// Holds no per-call state; cloning is cheap and clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpClient,
    base_url: String,
}

impl Client {
    /// Creates a client for the public deployment.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(PETFRIENDS_API_URL)
    }

    /// Creates a client for a custom base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(base_url, HttpClientConfig::default())
    }

    /// Creates a client with custom HTTP configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service, with or without trailing slash
    /// * `config` - HTTP client configuration; unset options keep the
    ///   defaults of the underlying HTTP library
    pub fn with_config(base_url: &str, config: HttpClientConfig) -> Result<Self, Error> {
        let mut builder = HttpClient::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(addr) = config.local_address {
            builder = builder.local_address(addr);
        }

        let http_client = builder.build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client for the base URL configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Self::with_base_url(&settings.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests an auth key for the given credentials.
    ///
    /// The service answers 200 with `{"key": ...}` for valid credentials and
    /// 403 otherwise.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse, Error> {
        let request = self
            .http_client
            .get(self.url("/api/key"))
            .header("email", header_value("email", email, false)?)
            .header("password", header_value("password", password, true)?);

        self.send(request, "GET", "/api/key").await
    }

    /// Lists pets, either all of them or only the caller's.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> Result<ApiResponse, Error> {
        let request = self
            .authorized(self.http_client.get(self.url("/api/pets")), auth_key)?
            .query(&[("filter", filter.as_str())]);

        self.send(request, "GET", "/api/pets").await
    }

    /// Creates a pet with a photo read from `photo`.
    ///
    /// The service does not validate the text fields; empty strings are
    /// stored and echoed back.
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        let form = Form::new()
            .text("name", name.to_owned())
            .text("animal_type", animal_type.to_owned())
            .text("age", age.to_owned())
            .part("pet_photo", photo_part(photo.as_ref())?);

        let request = self
            .authorized(self.http_client.post(self.url("/api/pets")), auth_key)?
            .multipart(form);

        self.send(request, "POST", "/api/pets").await
    }

    /// Creates a pet without a photo.
    pub async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, Error> {
        let path = "/api/create_pet_simple";
        let request = self
            .authorized(self.http_client.post(self.url(path)), auth_key)?
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.send(request, "POST", path).await
    }

    /// Replaces the photo of an existing pet.
    pub async fn set_pet_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/api/pets/set_photo/{}", pet_id);
        let form = Form::new().part("pet_photo", photo_part(photo.as_ref())?);

        let request = self
            .authorized(self.http_client.post(self.url(&path)), auth_key)?
            .multipart(form);

        self.send(request, "POST", &path).await
    }

    /// Updates name, type and age of an existing pet.
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self
            .authorized(self.http_client.put(self.url(&path)), auth_key)?
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.send(request, "PUT", &path).await
    }

    /// Deletes a pet and returns the status the service answered with.
    ///
    /// Whether deleting someone else's pet is refused is up to the service.
    pub async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<StatusCode, Error> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self.authorized(self.http_client.delete(self.url(&path)), auth_key)?;

        Ok(self.send(request, "DELETE", &path).await?.status)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(
        &self,
        request: RequestBuilder,
        auth_key: &AuthKey,
    ) -> Result<RequestBuilder, Error> {
        let value = header_value(AUTH_KEY_HEADER, auth_key.as_str(), true)?;
        Ok(request.header(AUTH_KEY_HEADER, value))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(method, path, status = status.as_u16(), "petfriends request");

        Ok(ApiResponse::new(status, ResponseBody::from_bytes(&bytes)))
    }
}

fn header_value(name: &'static str, value: &str, sensitive: bool) -> Result<HeaderValue, Error> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|source| Error::InvalidHeader { name, source })?;
    header.set_sensitive(sensitive);
    Ok(header)
}

fn photo_part(path: &Path) -> Result<Part, Error> {
    let bytes = std::fs::read(path).map_err(|source| Error::Photo {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo.jpg".to_string());

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))?)
}

/// MIME type sent for a photo, by extension. The service only accepts JPEG
/// and PNG, so anything unknown goes out as JPEG.
fn photo_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}
