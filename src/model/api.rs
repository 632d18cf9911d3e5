use serde::{Deserialize, Serialize};

/// Success envelope wrapping a single payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope carrying only a message, used by delete and state-change endpoints.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Failure envelope returned by every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginationMetaDto {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Envelope for list endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct PaginatedDto<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PaginationMetaDto,
}

/// Query string accepted by list endpoints.
///
/// Every field is optional; defaults and bounds are applied in `util::pagination`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ListQueryDto {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PingDto {
    pub message: String,
}
