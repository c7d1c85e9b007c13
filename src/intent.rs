//! Raw share-intent types, as marshaled by the native half of the bridge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The key-value payload attached to a share intent. Keys are unique per bag.
pub type ExtrasBag = BTreeMap<String, ExtrasValue>;

/// One value slot of an [`ExtrasBag`].
///
/// The native bundle is dynamically typed, so the bridge tags every entry
/// with its concrete type (`{"kind": ..., "value": ...}` on the wire).
/// Vendor-specific types the bridge cannot represent arrive as
/// [`ExtrasValue::Unsupported`] and are dropped during normalization instead
/// of failing the whole message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ExtrasValue {
    String(String),
    Int(i32),
    Long(i64),
    Bool(bool),
    Float(f32),
    Double(f64),
    StringArray(Vec<String>),
    /// Heterogeneous list; elements may be any variant, including locators.
    List(Vec<ExtrasValue>),
    /// Opaque resource locator in its canonical string form.
    Uri(String),
    /// Nested bag. Marshaled from flat OS data, so nesting is finite.
    Bundle(ExtrasBag),
    #[serde(other)]
    Unsupported,
}

/// One slot of a multi-item clip payload. Any subset of the fields may be
/// present at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipEntry {
    pub text: Option<String>,
    pub uri: Option<String>,
    pub html_text: Option<String>,
}

/// A share intent as delivered by the host OS. This plugin only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMessage {
    pub action: Option<String>,
    /// MIME type of the shared payload.
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Primary data locator and its scheme.
    pub uri: Option<String>,
    pub scheme: Option<String>,
    /// Referrer URI naming the sending application, when the OS supplies one.
    pub referrer: Option<String>,
    #[serde(default)]
    pub extras: ExtrasBag,
    /// Only present on platform tiers that deliver multi-item clips.
    pub clip_items: Option<Vec<ClipEntry>>,
}
