//! Intent normalization: turns the share intent's loosely typed payload
//! into the single JSON document the web layer receives.
//!
//! The pass runs four stages over one intent, all writing into the same
//! document: source attribution, the generic extras walk, the well-known
//! field overlay, and the clip-item extraction. Failures inside a stage are
//! contained there (omit the field, keep going); only an unexpected failure
//! of the whole pass surfaces, as an `error` field next to whatever was
//! already extracted.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::intent::{ClipEntry, ExtrasBag, ExtrasValue, IntentMessage};
use crate::models::{ClipItem, SharedData, SharedFilesEvent};
use crate::source::{resolve_source, SourceLookup};
use crate::verbosity;

/// Action verb of a single-item share.
pub const ACTION_SEND: &str = "android.intent.action.SEND";
/// Action verb of a multi-item share.
pub const ACTION_SEND_MULTIPLE: &str = "android.intent.action.SEND_MULTIPLE";

/// Nested bundles come from marshaling flat OS data and cannot cycle, but
/// that invariant is the platform's, not ours. Recursion stops here.
const MAX_BUNDLE_DEPTH: usize = 16;

// Well-known extra keys, as the platform names them.
const EXTRA_TEXT: &str = "android.intent.extra.TEXT";
const EXTRA_HTML_TEXT: &str = "android.intent.extra.HTML_TEXT";
const EXTRA_SUBJECT: &str = "android.intent.extra.SUBJECT";
const EXTRA_TITLE: &str = "android.intent.extra.TITLE";
const EXTRA_EMAIL: &str = "android.intent.extra.EMAIL";
const EXTRA_CC: &str = "android.intent.extra.CC";
const EXTRA_BCC: &str = "android.intent.extra.BCC";
const EXTRA_PHONE_NUMBER: &str = "android.intent.extra.PHONE_NUMBER";
const EXTRA_STREAM: &str = "android.intent.extra.STREAM";
const EXTRA_LATITUDE: &str = "latitude";
const EXTRA_LONGITUDE: &str = "longitude";
const EXTRA_MEDIA_OUTPUT: &str = "output";
const EXTRA_EVENT_TITLE: &str = "title";
const EXTRA_EVENT_DESCRIPTION: &str = "description";
const EXTRA_EVENT_LOCATION: &str = "eventLocation";

/// Whether an inbound message is a share this plugin handles at all.
/// Rejection is "not for us", never an error.
pub fn is_share_intent(intent: Option<&IntentMessage>) -> bool {
    intent
        .and_then(|i| i.action.as_deref())
        .is_some_and(|action| action == ACTION_SEND || action == ACTION_SEND_MULTIPLE)
}

/// Run the whole normalization pass over one accepted intent.
///
/// Never fails: an unexpected error mid-pass is folded into the `error`
/// field next to the partially built document, so a malformed message
/// cannot crash the host.
pub fn process_intent<L: SourceLookup>(intent: &IntentMessage, lookup: &L) -> SharedFilesEvent {
    if verbosity::verbose() {
        log_intent(intent);
    }

    let mut data = SharedData::default();
    let error = match fill(&mut data, intent, lookup) {
        Ok(()) => None,
        Err(e) => {
            log::error!("openwith: intent normalization failed: {e}");
            Some(e.to_string())
        }
    };

    SharedFilesEvent {
        data: (!data.is_empty()).then_some(data),
        error,
    }
}

fn fill<L: SourceLookup>(
    data: &mut SharedData,
    intent: &IntentMessage,
    lookup: &L,
) -> Result<()> {
    data.source = resolve_source(intent.referrer.as_deref(), lookup);
    data.action = intent.action.clone();
    data.mime_type = intent.mime_type.clone();
    data.uri = intent.uri.clone();
    data.scheme = intent.scheme.clone();

    if !intent.extras.is_empty() {
        let mut extras = normalize_extras(&intent.extras, 0)?;
        extract_well_known(&intent.extras, &mut extras);
        data.extras = Some(extras);
    }

    data.clip_data = extract_clip_items(intent.clip_items.as_deref());
    Ok(())
}

/// Generic walk: every bag entry becomes a JSON value per its variant.
/// Unsupported variants are dropped, not errors.
fn normalize_extras(bag: &ExtrasBag, depth: usize) -> Result<Map<String, Value>> {
    if depth >= MAX_BUNDLE_DEPTH {
        return Err(Error::ExtrasTooDeep {
            limit: MAX_BUNDLE_DEPTH,
        });
    }

    let mut out = Map::new();
    for (key, value) in bag {
        if let Some(converted) = convert_value(value, depth)? {
            out.insert(key.clone(), converted);
        }
    }
    Ok(out)
}

/// One tagged value to JSON. `None` drops the entry.
fn convert_value(value: &ExtrasValue, depth: usize) -> Result<Option<Value>> {
    let converted = match value {
        ExtrasValue::String(s) => Value::from(s.clone()),
        ExtrasValue::Int(n) => Value::from(*n),
        ExtrasValue::Long(n) => Value::from(*n),
        ExtrasValue::Bool(b) => Value::from(*b),
        ExtrasValue::Float(f) => Value::from(*f),
        ExtrasValue::Double(d) => Value::from(*d),
        ExtrasValue::StringArray(items) => Value::from(items.clone()),
        ExtrasValue::List(items) => {
            // Locators inside a list are flattened to their string form;
            // other elements keep their own conversion, order intact.
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(v) = convert_value(item, depth)? {
                    list.push(v);
                }
            }
            Value::Array(list)
        }
        ExtrasValue::Uri(uri) => Value::from(uri.clone()),
        ExtrasValue::Bundle(nested) => Value::Object(normalize_extras(nested, depth + 1)?),
        ExtrasValue::Unsupported => return Ok(None),
    };
    Ok(Some(converted))
}

/// Overlay the fixed list of well-known fields under their web-facing
/// names. Runs after the generic walk and wins on key collisions. A present
/// key with an unexpected variant is skipped, matching the bag's leniency
/// policy.
fn extract_well_known(bag: &ExtrasBag, out: &mut Map<String, Value>) {
    put_string(bag, EXTRA_TEXT, "text", out);
    put_string(bag, EXTRA_HTML_TEXT, "htmlText", out);
    put_string(bag, EXTRA_SUBJECT, "subject", out);
    put_string(bag, EXTRA_TITLE, "title", out);
    put_string_array(bag, EXTRA_EMAIL, "email", out);
    put_string_array(bag, EXTRA_CC, "cc", out);
    put_string_array(bag, EXTRA_BCC, "bcc", out);
    put_string(bag, EXTRA_PHONE_NUMBER, "phoneNumber", out);
    put_double(bag, EXTRA_LATITUDE, "latitude", out);
    put_double(bag, EXTRA_LONGITUDE, "longitude", out);
    put_uri(bag, EXTRA_MEDIA_OUTPUT, "mediaOutput", out);
    put_string(bag, EXTRA_EVENT_TITLE, "eventTitle", out);
    put_string(bag, EXTRA_EVENT_DESCRIPTION, "eventDescription", out);
    put_string(bag, EXTRA_EVENT_LOCATION, "eventLocation", out);
    put_uri(bag, EXTRA_STREAM, "stream", out);
}

fn put_string(bag: &ExtrasBag, key: &str, name: &str, out: &mut Map<String, Value>) {
    if let Some(ExtrasValue::String(s)) = bag.get(key) {
        out.insert(name.to_owned(), Value::from(s.clone()));
    }
}

fn put_string_array(bag: &ExtrasBag, key: &str, name: &str, out: &mut Map<String, Value>) {
    if let Some(ExtrasValue::StringArray(items)) = bag.get(key) {
        out.insert(name.to_owned(), Value::from(items.clone()));
    }
}

fn put_double(bag: &ExtrasBag, key: &str, name: &str, out: &mut Map<String, Value>) {
    if let Some(ExtrasValue::Double(d)) = bag.get(key) {
        out.insert(name.to_owned(), Value::from(*d));
    }
}

fn put_uri(bag: &ExtrasBag, key: &str, name: &str, out: &mut Map<String, Value>) {
    if let Some(ExtrasValue::Uri(uri)) = bag.get(key) {
        out.insert(name.to_owned(), Value::from(uri.clone()));
    }
}

/// One output record per clip slot, order preserved, fields independent.
/// No list on the intent means no `clipData` field, not an empty one.
fn extract_clip_items(entries: Option<&[ClipEntry]>) -> Option<Vec<ClipItem>> {
    let entries = entries?;
    Some(
        entries
            .iter()
            .map(|entry| ClipItem {
                text: entry.text.clone(),
                uri: entry.uri.clone(),
                html_text: entry.html_text.clone(),
            })
            .collect(),
    )
}

fn log_intent(intent: &IntentMessage) {
    log::debug!(
        "openwith: intent action={:?} type={:?} uri={:?} referrer={:?}",
        intent.action,
        intent.mime_type,
        intent.uri,
        intent.referrer
    );
    for (key, value) in &intent.extras {
        log::debug!("openwith: extra [{key}]: {value:?}");
    }
}
