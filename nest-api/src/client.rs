use rest_client::{Method, RestClient};
use tracing::debug;

use crate::config::Config;
use crate::decode::{decode_collection, decode_single, is_blank};
use crate::resource::{Resource, ResourceKind};
use crate::value::FieldValues;
use crate::{ApiError, Result};

/// Base URL of the production devices API
pub const DEFAULT_BASE_URL: &str = "https://developer-api.nest.com/devices";

/// A client for reading and writing Nest resources
///
/// The client holds the access token and base URL and nothing else, so it
/// can be cloned freely and shared between threads. Every call is a
/// blocking round trip; nothing is cached.
///
/// # Example
/// ```rust,no_run
/// use nest_api::{NestClient, Thermostat};
///
/// let client = NestClient::new("c.access-token");
/// for thermostat in client.get_all::<Thermostat>()? {
///     println!("{} is {}", thermostat.name, thermostat.hvac_mode);
/// }
/// # Ok::<(), nest_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NestClient {
    rest_client: RestClient,
    base_url: String,
}

impl NestClient {
    /// Create a client for the production API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_rest_client(RestClient::new(access_token), DEFAULT_BASE_URL)
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_rest_client(
            RestClient::new(config.access_token.clone()),
            config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Create a client with a custom transport and base URL (tests, proxies)
    pub fn with_rest_client(rest_client: RestClient, base_url: &str) -> Self {
        Self {
            rest_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Point this client at another base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path below the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch every resource of type `R`
    ///
    /// An empty response means the account has none and yields an empty vec.
    pub fn get_all<R: Resource>(&self) -> Result<Vec<R>> {
        let url = self.endpoint(R::KIND.path());
        debug!(kind = %R::KIND, "fetching collection");

        let data = self.rest_client.execute(&url, Method::Get, None)?;
        decode_collection(&data)
    }

    /// Fetch one resource of type `R` by its ID
    pub fn get<R: Resource>(&self, id: &str) -> Result<R> {
        validate_id(R::KIND, id)?;

        let url = self.endpoint(&format!("{}/{}", R::KIND.path(), id));
        debug!(kind = %R::KIND, id, "fetching resource");

        let data = self.rest_client.execute(&url, Method::Get, None)?;

        if is_blank(&data) {
            return Err(ApiError::ResourceNotFound {
                resource: R::KIND.display_name(),
                id: id.to_string(),
            });
        }

        decode_single(&data)
    }

    /// Read a single field of a resource as raw text
    ///
    /// The body is returned unparsed: strings may or may not carry JSON
    /// quotes, lists come back as JSON array literals. Use
    /// [`FromFieldText`](crate::FromFieldText) to convert.
    ///
    /// # Arguments
    /// * `kind` - The resource collection
    /// * `id` - Device or structure ID
    /// * `field` - Wire name of the field, e.g. `battery_health`
    pub fn get_value(&self, kind: ResourceKind, id: &str, field: &str) -> Result<String> {
        validate_id(kind, id)?;

        let url = self.endpoint(&format!("{}/{}/{}", kind.path(), id, field));
        debug!(%kind, id, field, "reading field");

        let data = self.rest_client.execute(&url, Method::Get, None)?;

        if data.is_empty() {
            return Err(ApiError::FieldNotFound {
                resource: kind.title(),
                field: field.to_string(),
            });
        }

        String::from_utf8(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Partially update a resource with the given field values
    ///
    /// Only the listed fields change on the server. An empty response is
    /// reported as the resource not being found.
    pub fn set_value(&self, kind: ResourceKind, id: &str, values: &FieldValues) -> Result<()> {
        validate_id(kind, id)?;

        let body = values.encode()?;
        let url = self.endpoint(&format!("{}/{}", kind.path(), id));
        debug!(%kind, id, fields = values.len(), "writing fields");

        let data = self.rest_client.execute(&url, Method::Put, Some(&body))?;

        if data.is_empty() {
            return Err(ApiError::ResourceNotFound {
                resource: kind.display_name(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

fn validate_id(kind: ResourceKind, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(ApiError::EmptyParameter(kind.id_label()));
    }
    Ok(())
}
