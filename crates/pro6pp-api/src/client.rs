//! Pro6pp API HTTP client

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::distance::haversine_distance;
use crate::error::{Pro6ppError, Result};
use crate::params::{prepare, ParamValue, RequestParameters};
use crate::postal::classify;
use crate::types::{DistanceAlgorithm, PostalInput, ResponseFormat};

const DEFAULT_BASE_URL: &str = "http://api.pro6pp.nl/v1/";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

const DEFAULT_RANGE_METERS: u32 = 5000;
const DEFAULT_PER_PAGE: u32 = 10;
const DEFAULT_PAGE: u32 = 1;

/// Account and transport settings for [`Pro6ppClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub format: ResponseFormat,
    pub pretty: bool,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// JSON responses, no pretty printing, production host, 5 second timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            format: ResponseFormat::default(),
            pretty: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the Pro6pp postal code API.
///
/// Every network method returns the response body verbatim; nothing is parsed.
pub struct Pro6ppClient {
    http: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
}

impl Pro6ppClient {
    /// Create a client with default settings for the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut base = config.base_url.clone();
        // Url::join drops the last segment unless the base ends with '/'
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a full address, including coordinates, from a postal code and
    /// optional street number and extension.
    ///
    /// # Arguments
    /// * `postal` - 4-digit area code or 6-character code; whitespace is ignored
    /// * `streetnumber` - House number, sent empty when absent
    /// * `extension` - House number extension such as `"c"`, sent empty when absent
    pub async fn autocomplete(
        &self,
        postal: impl Into<PostalInput>,
        streetnumber: Option<u32>,
        extension: Option<&str>,
    ) -> Result<String> {
        let postal = classify(postal)?;

        let mut params = RequestParameters::new();
        params.insert(postal.param_name(), postal.into_value());
        params.insert(
            "streetnumber",
            streetnumber.map_or_else(|| ParamValue::from(""), ParamValue::from),
        );
        params.insert("extension", extension.unwrap_or(""));

        self.call("autocomplete", params).await
    }

    /// Find the address closest to a coordinate
    pub async fn reverse(&self, lat: f64, lng: f64) -> Result<String> {
        let params = RequestParameters::new().with("lat", lat).with("lng", lng);

        self.call("reverse", params).await
    }

    /// Sort a set of area codes from nearest to farthest.
    ///
    /// `origin` names the reference point: `nl_fourpp`, `nl_sixpp` or a
    /// `lat`/`lng` pair. Its entries are appended after `target_nl_fourpps`.
    pub async fn locator<I>(&self, targets: I, origin: RequestParameters) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<PostalInput>,
    {
        let joined = targets
            .into_iter()
            .map(|t| t.into().normalize())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = RequestParameters::new().with("target_nl_fourpps", joined);
        params.extend(origin);

        self.call("locator", params).await
    }

    /// List area codes within `range` metres of `nl_fourpp`.
    ///
    /// Defaults: 5000 metres, 10 per page, page 1.
    pub async fn range(
        &self,
        nl_fourpp: impl Into<PostalInput>,
        range: Option<u32>,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<String> {
        let params = RequestParameters::new()
            .with("nl_fourpp", nl_fourpp.into().normalize())
            .with("range", range.unwrap_or(DEFAULT_RANGE_METERS))
            .with("per_page", per_page.unwrap_or(DEFAULT_PER_PAGE))
            .with("page", page.unwrap_or(DEFAULT_PAGE));

        self.call("range", params).await
    }

    /// Autocomplete a city name, at most `per_page` suggestions (default 10)
    pub async fn suggest(&self, nl_city: &str, per_page: Option<u32>) -> Result<String> {
        let params = RequestParameters::new()
            .with("nl_city", nl_city)
            .with("per_page", per_page.unwrap_or(DEFAULT_PER_PAGE));

        self.call("suggest", params).await
    }

    /// Distance between two area codes as computed by the service
    pub async fn distance(
        &self,
        from_nl_fourpp: impl Into<PostalInput>,
        to_nl_fourpp: impl Into<PostalInput>,
        algorithm: Option<DistanceAlgorithm>,
    ) -> Result<String> {
        let params = RequestParameters::new()
            .with("from_nl_fourpp", from_nl_fourpp.into().normalize())
            .with("to_nl_fourpp", to_nl_fourpp.into().normalize())
            .with("algorithm", algorithm.unwrap_or_default().as_str());

        self.call("distance", params).await
    }

    /// Local haversine distance, no request is made
    pub fn coordinate_distance(
        &self,
        lat1: f64,
        lng1: f64,
        lat2: f64,
        lng2: f64,
        miles: bool,
    ) -> f64 {
        haversine_distance(lat1, lng1, lat2, lng2, miles)
    }

    /// Full request URL for an endpoint, account fields included
    pub(crate) fn build_url(&self, path: &str, params: &RequestParameters) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (k, v.to_string())));
        Ok(url)
    }

    async fn call(&self, path: &str, params: RequestParameters) -> Result<String> {
        let params = prepare(
            params,
            &self.config.api_key,
            self.config.format.as_str(),
            self.config.pretty,
        );
        let url = self.build_url(path, &params)?;

        // The query carries the API key, so only the path is logged
        debug!(path, "Sending Pro6pp request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(path, status = %status, "Pro6pp request failed");
            return Err(Pro6ppError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(path, status = %status, bytes = body.len(), "Pro6pp response received");
        Ok(body)
    }
}
