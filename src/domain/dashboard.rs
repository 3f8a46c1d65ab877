// Dashboard domain model - source descriptor and copy payload
use super::error::MetadataError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Superset copies dashboards without cloning their charts.
pub const DUPLICATE_SLICES: bool = false;

/// Source dashboard as read from the server. Both layout fields are
/// serialized JSON and may be missing or empty.
#[derive(Debug, Clone, Default)]
pub struct DashboardDescriptor {
    pub id: Option<i64>,
    pub json_metadata: Option<String>,
    pub position_json: Option<String>,
}

impl DashboardDescriptor {
    pub fn new(id: Option<i64>, json_metadata: Option<String>, position_json: Option<String>) -> Self {
        Self {
            id,
            json_metadata,
            position_json,
        }
    }

    /// The dashboard's metadata object with `positions` set to its parsed layout.
    pub fn merged_metadata(&self) -> Result<Map<String, Value>, MetadataError> {
        let mut metadata = match parse_serialized("json_metadata", self.json_metadata.as_deref())? {
            Value::Object(map) => map,
            _ => return Err(MetadataError::NotAnObject),
        };
        let positions = parse_serialized("position_json", self.position_json.as_deref())?;

        // Overwriting keeps the key's original position
        metadata.insert("positions".to_string(), positions);
        Ok(metadata)
    }
}

fn parse_serialized(field: &'static str, raw: Option<&str>) -> Result<Value, MetadataError> {
    match raw {
        None | Some("") => Ok(Value::Object(Map::new())),
        Some(text) => {
            serde_json::from_str(text).map_err(|source| MetadataError::InvalidJson { field, source })
        }
    }
}

/// Body of the dashboard copy request. Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPayload {
    pub dashboard_title: String,
    pub duplicate_slices: bool,
    pub json_metadata: String,
}

impl CopyPayload {
    pub fn from_descriptor(
        descriptor: &DashboardDescriptor,
        dashboard_title: String,
    ) -> Result<Self, MetadataError> {
        let metadata = descriptor.merged_metadata()?;
        Ok(Self {
            dashboard_title,
            duplicate_slices: DUPLICATE_SLICES,
            json_metadata: Value::Object(metadata).to_string(),
        })
    }
}

/// Result of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub source_id: String,
    pub new_dashboard_id: Option<i64>,
}
