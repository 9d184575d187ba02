use serde::{Deserialize, Serialize};

/// Error payload the API may attach to non-2xx responses
///
/// Decoding is best-effort: when the body does not parse, the raw text is
/// reported instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<u16>,
}
