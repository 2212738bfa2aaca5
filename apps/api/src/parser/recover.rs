use serde_json::Value;
use tracing::warn;

use crate::parser::schema::target_schema;

/// Best-effort recovery of a JSON object from free-text model output.
///
/// Slices the substring between the first `{` and the last `}` and attempts
/// to decode it. Any failure falls back to the static target schema with a
/// warning; callers always get a value, never an error.
///
/// Recovered objects go through a shape pass that drops keys not present in
/// the target schema. An object left with no recognized key is treated the
/// same as undecodable output.
pub fn recover_json(raw: &str) -> Value {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            match serde_json::from_str::<Value>(&raw[start..=end]) {
                Ok(value) => {
                    if let Some(repaired) = repair_shape(value) {
                        return repaired;
                    }
                }
                Err(e) => warn!("model output was not decodable JSON: {e}"),
            }
        }
    }

    warn!("falling back to the default resume schema");
    target_schema()
}

/// Drops keys the target schema does not define. Returns `None` when nothing
/// recognizable remains (or the value is not an object at all), which the
/// caller treats as a malformed reply.
fn repair_shape(value: Value) -> Option<Value> {
    let Value::Object(mut map) = value else {
        warn!("recovered JSON is not an object");
        return None;
    };

    let schema = target_schema();
    let known_keys = schema.as_object().expect("target schema is an object");

    let before = map.len();
    map.retain(|key, _| known_keys.contains_key(key));
    if map.len() < before {
        warn!("dropped {} unrecognized key(s) from model output", before - map.len());
    }

    if map.is_empty() {
        warn!("recovered JSON shares no keys with the target schema");
        return None;
    }

    Some(Value::Object(map))
}
