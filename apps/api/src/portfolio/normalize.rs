//! Resume record normalization.
//!
//! The structurer returns JSON whose shape drifts run to run: key aliases
//! (`experience` vs `work_experience`), descriptions that are sometimes a
//! string and sometimes a list, sections that are missing outright. This
//! module coerces all of that into one canonical context so templates can
//! iterate sections without guarding every field.
//!
//! `normalize` is total: any JSON object in, canonical context out. Malformed
//! fields are absorbed, never surfaced as errors.

use serde_json::{Map, Value};

/// Canonical context handed to the template renderer.
///
/// Guarantees after `normalize`:
/// - `full_experience` is always an array: work/experience entries in original
///   order, followed by internship entries in original order.
/// - `projects` is always present (missing input becomes `[]`).
/// - every string-valued `description` inside those arrays is wrapped into a
///   one-element array, so templates can always render bullet lists.
/// - all other input keys pass through unchanged.
pub type PortfolioContext = Map<String, Value>;

/// Builds the canonical portfolio context from an arbitrarily-shaped
/// structured resume record. Never fails.
pub fn normalize(mut record: Map<String, Value>) -> PortfolioContext {
    // The structurer sometimes labels work history "experience" instead of
    // "work_experience". Exactly one source is used — never both merged.
    let work = match record.get("work_experience") {
        Some(v) if !is_falsy(v) => v.clone(),
        _ => record.get("experience").cloned().unwrap_or(Value::Null),
    };

    let mut full_experience: Vec<Value> = Vec::new();
    if let Value::Array(entries) = work {
        full_experience.extend(entries);
    }
    // Internships are appended after work history to form one unified path.
    // Non-array values contribute nothing; iterating a scalar is never attempted.
    if let Some(Value::Array(interns)) = record.get("internships") {
        full_experience.extend(interns.iter().cloned());
    }
    for entry in &mut full_experience {
        wrap_string_description(entry);
    }

    let projects = match record.remove("projects") {
        None => Value::Array(Vec::new()),
        Some(Value::Array(mut entries)) => {
            for entry in &mut entries {
                wrap_string_description(entry);
            }
            Value::Array(entries)
        }
        // A scalar under "projects" is carried through untouched rather than
        // iterated per-character.
        Some(other) => other,
    };

    record.insert("full_experience".to_string(), Value::Array(full_experience));
    record.insert("projects".to_string(), projects);
    record
}

/// Wraps a string-valued `description` into a one-element array.
///
/// Everything else — already an array, absent, other types, non-object
/// entries (stray strings inside a section list) — is left untouched.
fn wrap_string_description(entry: &mut Value) {
    let Some(obj) = entry.as_object_mut() else {
        return;
    };
    if let Some(desc) = obj.get_mut("description") {
        if desc.is_string() {
            let single = std::mem::replace(desc, Value::Null);
            *desc = Value::Array(vec![single]);
        }
    }
}

/// Mirrors truthiness for the work-source fallback: null, false, zero, and
/// empty strings/arrays/objects all defer to the `experience` alias.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("test record must be an object").clone()
    }

    #[test]
    fn test_empty_record_gets_empty_sections() {
        let ctx = normalize(Map::new());
        assert_eq!(ctx["full_experience"], json!([]));
        assert_eq!(ctx["projects"], json!([]));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_experience_alias_used_when_work_experience_missing() {
        let ctx = normalize(record(json!({
            "experience": [{"description": "Built X"}],
            "projects": []
        })));
        assert_eq!(ctx["full_experience"], json!([{"description": ["Built X"]}]));
        assert_eq!(ctx["projects"], json!([]));
    }

    #[test]
    fn test_experience_alias_used_when_work_experience_empty() {
        let ctx = normalize(record(json!({
            "work_experience": [],
            "experience": [{"company": "Acme"}]
        })));
        assert_eq!(ctx["full_experience"], json!([{"company": "Acme"}]));
    }

    #[test]
    fn test_work_experience_wins_over_alias_no_merge() {
        let ctx = normalize(record(json!({
            "work_experience": [{"company": "Primary"}],
            "experience": [{"company": "Ignored"}]
        })));
        assert_eq!(ctx["full_experience"], json!([{"company": "Primary"}]));
    }

    #[test]
    fn test_internships_appended_after_work_in_order() {
        let ctx = normalize(record(json!({
            "work_experience": [{"company": "A"}, {"company": "B"}],
            "internships": [{"company": "C"}]
        })));
        assert_eq!(
            ctx["full_experience"],
            json!([{"company": "A"}, {"company": "B"}, {"company": "C"}])
        );
    }

    #[test]
    fn test_string_description_wrapped_for_internship_entries() {
        let ctx = normalize(record(json!({
            "internships": [{"description": "Summer role"}]
        })));
        assert_eq!(ctx["full_experience"], json!([{"description": ["Summer role"]}]));
    }

    #[test]
    fn test_description_wrapping_is_idempotent() {
        let once = normalize(record(json!({
            "experience": [{"description": "Built X"}]
        })));
        let twice = normalize(once.clone());
        assert_eq!(once["full_experience"], json!([{"description": ["Built X"]}]));
        assert_eq!(twice["full_experience"], once["full_experience"]);
    }

    #[test]
    fn test_array_description_untouched() {
        let ctx = normalize(record(json!({
            "work_experience": [{"description": ["a", "b"]}]
        })));
        assert_eq!(ctx["full_experience"], json!([{"description": ["a", "b"]}]));
    }

    #[test]
    fn test_missing_and_odd_typed_descriptions_untouched() {
        let ctx = normalize(record(json!({
            "work_experience": [{"company": "NoDesc"}, {"description": 7}]
        })));
        assert_eq!(
            ctx["full_experience"],
            json!([{"company": "NoDesc"}, {"description": 7}])
        );
    }

    #[test]
    fn test_non_object_entries_do_not_crash() {
        let ctx = normalize(record(json!({
            "work_experience": ["stray string", {"description": "ok"}],
            "projects": [42]
        })));
        assert_eq!(
            ctx["full_experience"],
            json!(["stray string", {"description": ["ok"]}])
        );
        assert_eq!(ctx["projects"], json!([42]));
    }

    #[test]
    fn test_scalar_internships_skipped_not_iterated() {
        let ctx = normalize(record(json!({
            "work_experience": [{"company": "A"}],
            "internships": "not a list"
        })));
        assert_eq!(ctx["full_experience"], json!([{"company": "A"}]));
        // The original key is still visible to templates, unmodified.
        assert_eq!(ctx["internships"], json!("not a list"));
    }

    #[test]
    fn test_scalar_projects_passed_through_unmodified() {
        let ctx = normalize(record(json!({"projects": "oops"})));
        assert_eq!(ctx["projects"], json!("oops"));
    }

    #[test]
    fn test_projects_order_and_count_preserved() {
        let ctx = normalize(record(json!({
            "projects": [
                {"name": "one", "description": "solo"},
                {"name": "two", "description": ["kept"]},
                {"name": "three"}
            ]
        })));
        assert_eq!(
            ctx["projects"],
            json!([
                {"name": "one", "description": ["solo"]},
                {"name": "two", "description": ["kept"]},
                {"name": "three"}
            ])
        );
    }

    #[test]
    fn test_unrelated_keys_pass_through() {
        let ctx = normalize(record(json!({
            "personal_info": {"name": "Ada"},
            "summary": "Engineer",
            "skills": ["Rust"]
        })));
        assert_eq!(ctx["personal_info"], json!({"name": "Ada"}));
        assert_eq!(ctx["summary"], json!("Engineer"));
        assert_eq!(ctx["skills"], json!(["Rust"]));
        assert_eq!(ctx["full_experience"], json!([]));
        assert_eq!(ctx["projects"], json!([]));
    }
}
