use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DESCRIPTION_REQUIRED: &str = "Description parameter is required";
pub const API_FAILURE: &str = "API failure";

pub const HEALTH_ROUTE: &str = "/health";
pub const GENERATE_SHADER_ROUTE: &str = "/api/generate_shader";

/// Body of `POST /api/generate_shader`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GenerateShaderRequest {
    #[serde(default)]
    pub description: Option<String>,
}

impl GenerateShaderRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// The trimmed description, or `None` when it is missing or blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerateShaderResponse {
    pub shader_code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn description_required() -> Self {
        Self::new(DESCRIPTION_REQUIRED)
    }

    pub fn api_failure() -> Self {
        Self::new(API_FAILURE)
    }

    /// Upstream answered with a non-200 status.
    pub fn upstream_status(status: u16) -> Self {
        Self::new(format!("HTTP {status}"))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
