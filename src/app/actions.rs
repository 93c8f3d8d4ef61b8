//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! core never performs these effects itself; the plugin shim executes them in
//! order.

use crate::domain::RequestId;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the plugin.
    Quit,

    /// Requests the current weather for a city.
    ///
    /// The completion must come back as `Event::WeatherFetched` carrying the
    /// same `request` token.
    FetchWeather {
        /// City name exactly as listed in the city list.
        city: String,
        /// Token identifying this fetch.
        request: RequestId,
    },
}
