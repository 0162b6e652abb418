//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use tui_dispatch::DataResource;

/// Shown when a lookup is submitted with a blank query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a weather ID";

/// A stored weather record, as returned by `GET /weather/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherRecord {
    pub id: String,
    /// Date the record was requested for
    pub date: String,
    /// Free-text location the record was created for
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weather_data: WeatherPayload,
    pub created_at: String,
}

/// Snapshot captured from the upstream weather provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub current: CurrentConditions,
    #[serde(deserialize_with = "null_as_default")]
    pub location: PlaceInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub feelslike: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weather_descriptions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlaceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone_id: String,
}

/// Treat an explicit `null` like a missing field. The backend stores
/// optional form fields as null, and upstream providers null out readings.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherRecord {
    /// "Name, Country" header for the record card
    pub fn place_title(&self) -> String {
        let place = &self.weather_data.location;
        format!("{}, {}", place.name, place.country)
    }

    pub fn descriptions(&self) -> String {
        self.weather_data.current.weather_descriptions.join(", ")
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Raw query text, stored exactly as typed
    #[debug(section = "Lookup", label = "Query")]
    pub query: String,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    ///
    /// Holding the result and the error in one slot keeps at most one of
    /// them visible, and entering `Loading` discards both.
    #[debug(section = "Lookup", label = "Result", debug_fmt)]
    pub lookup: DataResource<WeatherRecord>,
}

impl AppState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lookup: DataResource::Empty,
        }
    }

    /// Query with surrounding whitespace removed - the identifier sent to the server
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn is_loading(&self) -> bool {
        self.lookup.is_loading()
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match &self.lookup {
            DataResource::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.lookup {
            DataResource::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}
