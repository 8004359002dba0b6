//! Wire types for the Better BibTeX endpoints
//!
//! Search results are CSL-JSON-ish records where nothing is guaranteed:
//! every field is optional and nested structures come in whatever shape the
//! translator produced. Absence is modeled per field instead of passing raw
//! dictionaries around.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One raw search result from `item.search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    /// The item's own citekey, used for bibliography lookups.
    /// BBT has shipped both spellings over the years.
    #[serde(alias = "citationKey")]
    pub citekey: Option<String>,

    pub title: Option<String>,

    #[serde(alias = "DOI")]
    pub doi: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Issued date as CSL date-parts; malformed shapes collapse to `None`
    #[serde(deserialize_with = "lenient")]
    pub issued: Option<DateParts>,

    /// Author list; malformed entries collapse to an empty list
    #[serde(deserialize_with = "lenient")]
    pub author: Vec<Name>,
}

/// CSL `date-parts` container: a list of `[year, month, day]` arrays whose
/// elements may be numbers or strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateParts {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<serde_json::Value>>,
}

/// One contributor name. Institutional ("literal") names carry neither part.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Name {
    pub family: Option<String>,
    pub given: Option<String>,
}

/// Deserialize a field, falling back to its default when the value does not
/// match the expected shape instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// JSON-RPC request envelope (always sent as a batch of one)
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: serde_json::Value,
}

impl RpcRequest {
    pub fn new(method: &'static str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}
