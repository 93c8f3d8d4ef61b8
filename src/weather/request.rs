//! Weather request construction and request context round-tripping.
//!
//! Zellij web requests carry an opaque string map ("context") that is handed
//! back verbatim with the result. We store the request token and the city
//! there so the completion can be routed without any plugin-side bookkeeping.

use crate::domain::error::{Result, WeatherTuiError};
use crate::domain::RequestId;
use std::collections::BTreeMap;
use url::Url;

/// Context key holding the request token.
const REQUEST_ID_KEY: &str = "request_id";

/// Context key holding the city name.
const CITY_KEY: &str = "city";

/// A fully built weather request, ready to hand to the HTTP facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// Token identifying this fetch.
    pub id: RequestId,
    /// City exactly as listed in the configured city list.
    pub city: String,
    /// Absolute request URL.
    pub url: String,
}

impl WeatherRequest {
    /// Builds the `GET {base_url}/{city}?format=j1` request for `city`.
    ///
    /// The city is percent-encoded as a single path segment; any path already
    /// present on `base_url` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherTuiError::Request`] if `base_url` is not an absolute
    /// URL that can carry a path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use weather_tui::domain::RequestId;
    /// use weather_tui::weather::WeatherRequest;
    ///
    /// let request = WeatherRequest::build("https://wttr.in", "New York", RequestId(1))?;
    /// assert_eq!(request.url, "https://wttr.in/New%20York?format=j1");
    /// # Ok::<(), weather_tui::WeatherTuiError>(())
    /// ```
    pub fn build(base_url: &str, city: &str, id: RequestId) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| WeatherTuiError::Request(format!("invalid weather url {base_url:?}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| WeatherTuiError::Request(format!("weather url {base_url:?} cannot carry a path")))?
            .pop_if_empty()
            .push(city);
        url.query_pairs_mut().append_pair("format", "j1");

        tracing::debug!(request_id = %id, city = %city, url = %url, "built weather request");

        Ok(Self {
            id,
            city: city.to_string(),
            url: url.into(),
        })
    }

    /// Returns the context map to attach to the web request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (REQUEST_ID_KEY.to_string(), self.id.0.to_string()),
            (CITY_KEY.to_string(), self.city.clone()),
        ])
    }
}

/// Recovers the request token and city from a returned context map.
///
/// Returns `None` when either key is missing or the token is not a number.
#[must_use]
pub fn parse_context(context: &BTreeMap<String, String>) -> Option<(RequestId, String)> {
    let id = context.get(REQUEST_ID_KEY)?.parse::<u64>().ok()?;
    let city = context.get(CITY_KEY)?.clone();
    Some((RequestId(id), city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_city_as_path_segment() {
        let request = WeatherRequest::build("https://wttr.in", "Cape Town", RequestId(4)).unwrap();
        assert_eq!(request.url, "https://wttr.in/Cape%20Town?format=j1");
        assert_eq!(request.city, "Cape Town");
        assert_eq!(request.id, RequestId(4));
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let request = WeatherRequest::build("https://wttr.in/", "Paris", RequestId(1)).unwrap();
        assert_eq!(request.url, "https://wttr.in/Paris?format=j1");
    }

    #[test]
    fn keeps_base_path() {
        let request =
            WeatherRequest::build("http://localhost:8080/weather", "Batumi", RequestId(1)).unwrap();
        assert_eq!(request.url, "http://localhost:8080/weather/Batumi?format=j1");
    }

    #[test]
    fn slash_in_city_stays_inside_one_segment() {
        let request = WeatherRequest::build("https://wttr.in", "a/b", RequestId(1)).unwrap();
        assert_eq!(request.url, "https://wttr.in/a%2Fb?format=j1");
    }

    #[test]
    fn rejects_relative_or_opaque_base() {
        assert!(matches!(
            WeatherRequest::build("wttr.in", "Paris", RequestId(1)),
            Err(WeatherTuiError::Request(_))
        ));
        assert!(matches!(
            WeatherRequest::build("mailto:someone@example.com", "Paris", RequestId(1)),
            Err(WeatherTuiError::Request(_))
        ));
    }

    #[test]
    fn context_round_trips() {
        let request =
            WeatherRequest::build("https://wttr.in", "Saint's Petersburg", RequestId(42)).unwrap();
        let parsed = parse_context(&request.context());
        assert_eq!(parsed, Some((RequestId(42), "Saint's Petersburg".to_string())));
    }

    #[test]
    fn garbled_context_is_rejected() {
        let mut context = BTreeMap::new();
        assert_eq!(parse_context(&context), None);

        context.insert(REQUEST_ID_KEY.to_string(), "seven".to_string());
        context.insert(CITY_KEY.to_string(), "Paris".to_string());
        assert_eq!(parse_context(&context), None);
    }
}
