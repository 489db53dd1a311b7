//! Asset records and unit handling.
//!
//! An asset *unit* is the composite identifier `policy_id + hex(asset_name)`
//! used by chain indexers to name one asset type. Providers return either
//! whole units or separate `policy_id`/`asset_name` fields; both shapes
//! normalize into [`AssetRecord`].

use serde::{Deserialize, Serialize};

/// One matched on-chain asset line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Composite `policy_id + hex(asset_name)` identifier.
    pub unit: String,

    /// Number of copies held.
    pub quantity: u64,

    /// Issuing collection identifier.
    pub policy_id: String,

    /// Decoded display name, when the unit carries a name suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,

    /// Opaque provider-specific metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl AssetRecord {
    /// Build a record from a whole asset unit.
    ///
    /// The name suffix after the policy-id prefix is hex-decoded into a
    /// display name; a unit with no suffix (the policy's unnamed asset)
    /// gets `asset_name = None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokengate_core::AssetRecord;
    ///
    /// // "4d6f6e61" is hex for "Mona"
    /// let record = AssetRecord::from_unit("abc1234d6f6e61", "abc123", 2);
    /// assert_eq!(record.asset_name.as_deref(), Some("Mona"));
    /// assert_eq!(record.quantity, 2);
    /// ```
    pub fn from_unit(unit: impl Into<String>, policy_id: &str, quantity: u64) -> Self {
        let unit = unit.into();
        let asset_name = unit
            .strip_prefix(policy_id)
            .filter(|suffix| !suffix.is_empty())
            .map(decode_asset_name);

        Self {
            unit,
            quantity,
            policy_id: policy_id.to_string(),
            asset_name,
            metadata: None,
        }
    }

    /// Build a record from separate policy-id and hex asset-name fields,
    /// recomposing the unit.
    pub fn from_hex_parts(policy_id: &str, asset_name_hex: &str, quantity: u64) -> Self {
        let unit = format!("{}{}", policy_id, asset_name_hex);
        let asset_name = if asset_name_hex.is_empty() {
            None
        } else {
            Some(decode_asset_name(asset_name_hex))
        };

        Self {
            unit,
            quantity,
            policy_id: policy_id.to_string(),
            asset_name,
            metadata: None,
        }
    }

    /// Attach opaque provider metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Whether this record belongs to the given collection.
    pub fn matches_policy(&self, policy_id: &str) -> bool {
        self.policy_id == policy_id
    }
}

/// Decode a hex asset-name suffix into a display name.
///
/// Falls back to lossy UTF-8 for binary names and to the raw string for
/// suffixes that are not valid hex at all.
fn decode_asset_name(suffix: &str) -> String {
    match hex::decode(suffix) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => suffix.to_string(),
    }
}

/// Hex-encode a display name into the unit suffix form.
pub fn encode_asset_name(name: &str) -> String {
    hex::encode(name.as_bytes())
}
