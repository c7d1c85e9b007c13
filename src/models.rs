use serde::{Deserialize, Serialize};

/// Attribution of the application that sent a share intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceApp {
    pub package_name: String,
    pub application_name: String,
    /// Icon resource handle as reported by the package registry.
    pub application_icon: String,
}

/// One normalized clip record. Fields are independent; all may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_text: Option<String>,
}

/// The normalized share payload handed to the web layer.
///
/// Built fresh per intent, never persisted. `extras` holds every
/// generically-converted bag key plus the well-known fields overlaid under
/// their web-facing names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceApp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_data: Option<Vec<ClipItem>>,
}

impl SharedData {
    /// True when no extraction stage produced anything.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.action.is_none()
            && self.mime_type.is_none()
            && self.uri.is_none()
            && self.scheme.is_none()
            && self.extras.is_none()
            && self.clip_data.is_none()
    }
}

/// Payload emitted with the `receivedFiles` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFilesEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SharedData>,
    /// Human-readable message when normalization failed partway through.
    /// The fields extracted before the failure are still present in `data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let event = SharedFilesEvent {
            data: Some(SharedData {
                action: Some("android.intent.action.SEND".into()),
                ..Default::default()
            }),
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"data": {"action": "android.intent.action.SEND"}})
        );
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let data = SharedData {
            source: Some(SourceApp {
                package_name: "com.example.sender".into(),
                application_name: "Sender".into(),
                application_icon: "42".into(),
            }),
            mime_type: Some("text/plain".into()),
            clip_data: Some(vec![ClipItem {
                html_text: Some("<b>hi</b>".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["source"]["packageName"], "com.example.sender");
        assert_eq!(value["type"], "text/plain");
        assert_eq!(value["clipData"][0]["htmlText"], "<b>hi</b>");
    }

    #[test]
    fn test_empty_data_detection() {
        assert!(SharedData::default().is_empty());
        let data = SharedData {
            uri: Some("content://provider/1".into()),
            ..Default::default()
        };
        assert!(!data.is_empty());
    }
}
