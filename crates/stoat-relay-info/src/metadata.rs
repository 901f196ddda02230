use serde::{Deserialize, Serialize};

/// A relay's self-reported capability document (NIP-11 style).
///
/// Relays are not required to populate any field: absent and `null` both
/// decode to `None`, and unknown fields in the body are ignored. A present
/// field of the wrong type fails the whole decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMetadata {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Administrator identity key (hex-encoded). Callers hand this to a
    /// profile-resolution service to render the admin's identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,

    /// Contact string, usually a URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Implementation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,

    /// Implementation version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Protocol extensions the relay declares, in its declared order.
    /// Duplicates are preserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_nips: Option<Vec<u32>>,

    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl RelayMetadata {
    /// Whether the relay declares support for `nip`.
    pub fn supports_nip(&self, nip: u32) -> bool {
        self.supported_nips
            .as_deref()
            .is_some_and(|nips| nips.contains(&nip))
    }
}
