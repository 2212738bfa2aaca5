use serde_json::{json, Value};

/// The fixed target schema for parsed resumes.
/// Doubles as the prompt skeleton and the fallback payload when the model
/// reply cannot be decoded.
pub fn target_schema() -> Value {
    json!({
        "name": null,
        "email": null,
        "phone": null,
        "education": [],
        "experience": [],
        "skills": [],
        "projects": []
    })
}
