//! Rust client for the Pro6pp Dutch postal code API
//!
//! Pro6pp resolves Dutch postal codes (`nl_fourpp` area codes and `nl_sixpp`
//! precise codes) to addresses and coordinates. This crate builds the query
//! for each endpoint, adds the account fields and returns the raw response
//! body. It also ships the two pieces of local logic the endpoints rely on:
//! postal code classification and haversine distance.
//!
//! # Example
//!
//! ```no_run
//! use pro6pp_api::{ClientConfig, Pro6ppClient, RequestParameters, ResponseFormat};
//!
//! # async fn example() -> Result<(), pro6pp_api::Pro6ppError> {
//! let client = Pro6ppClient::with_config(
//!     ClientConfig::new("my-api-key").with_format(ResponseFormat::Json),
//! )?;
//!
//! // Address for a 6-character postal code and house number
//! let body = client.autocomplete("6225XS", Some(7), Some("c")).await?;
//! println!("{}", body);
//!
//! // Nearest area codes to 6216
//! let origin = RequestParameters::new().with("nl_fourpp", 6216u32);
//! let body = client.locator(["6220", "6221", "6223"], origin).await?;
//! println!("{}", body);
//!
//! // Local calculation, no request
//! let km = client.coordinate_distance(50.858030, 5.717376, 50.840078, 5.659258, false);
//! println!("{:.3} km", km);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /autocomplete` - Address from postal code and house number
//! - `GET /reverse` - Address from coordinates
//! - `GET /locator` - Area codes sorted by distance to an origin
//! - `GET /range` - Area codes within a radius
//! - `GET /suggest` - City name autocomplete
//! - `GET /distance` - Road or straight distance between two area codes

mod client;
mod distance;
mod error;
mod params;
mod postal;
mod types;

pub use client::{ClientConfig, Pro6ppClient};
pub use distance::{haversine_distance, EARTH_RADIUS_KM, KM_TO_MILES};
pub use error::{Pro6ppError, Result};
pub use params::{prepare, ParamValue, RequestParameters};
pub use postal::{classify, ClassifiedPostal};
pub use types::{DistanceAlgorithm, PostalInput, ResponseFormat};
