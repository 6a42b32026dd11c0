//! Wire-level request/response types for the resume API.
//!
//! Input comes from a casual web form, so deserialization is deliberately
//! permissive: scalar fields accept strings or numbers (anything else
//! coerces to empty), and list fields accept a JSON array, a
//! comma/newline-delimited string, or nothing. Only the assembler decides
//! what is actually required.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field that may arrive as a list or as a delimited string. Normalized at
/// the boundary into trimmed, non-empty entries so the engine only ever sees
/// one canonical shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringList(pub Vec<String>);

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let items: Vec<String> = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(value_to_string)
                .collect(),
            Value::String(s) => s.split(['\n', ',']).map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Ok(StringList(
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ))
    }
}

/// Accepts a string or number, coerces anything else to an empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value).unwrap_or_default())
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One employment stint as submitted by the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInput {
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub team_size: String,
}

/// Raw generation request. `fullName`, `email`, and `mobile` are the only
/// fields that can fail assembly; everything else degrades to a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeInput {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mobile: String,
    #[serde(deserialize_with = "lenient_string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub qualification: String,
    #[serde(deserialize_with = "lenient_string")]
    pub passout_year: String,
    /// "Fresher" | "Experienced"; anything else falls back to `expYears`.
    #[serde(deserialize_with = "lenient_string")]
    pub exp_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub exp_years: String,
    #[serde(alias = "skills")]
    pub skills_selected: StringList,
    pub certifications_selected: StringList,
    pub languages: StringList,
    pub companies: Vec<CompanyInput>,
    #[serde(deserialize_with = "lenient_string")]
    pub full_address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pincode: String,
    #[serde(deserialize_with = "lenient_string")]
    pub availability: String,
    #[serde(deserialize_with = "lenient_string")]
    pub license_id: String,
    /// Free text; non-empty lines are appended verbatim to the highlights.
    #[serde(alias = "experienceDetails", deserialize_with = "lenient_string")]
    pub experience_notes: String,
    /// Caller-supplied nonce that disambiguates the shuffle seed. A fresh
    /// UUID is generated when absent, so two distinct requests diverge while
    /// a fixed request stays reproducible.
    #[serde(deserialize_with = "lenient_string")]
    pub request_token: String,
}

/// One assembled company block: metadata plus its responsibility bullets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBlock {
    pub company_name: String,
    pub location: String,
    /// DD-MM-YYYY, or the raw input when unparseable, or "-" when blank.
    pub start_date: String,
    pub end_date: String,
    pub team_size: String,
    pub points: Vec<String>,
}

/// Location, language, and status fields carried through for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub full_address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub languages: Vec<String>,
    pub exp_type: String,
    pub availability: String,
    pub license_id: String,
}

/// The fully assembled resume. JSON-serializable and complete — the renderer
/// never needs a second round-trip to recompute role-dependent content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub title: String,
    pub summary: String,
    pub education: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub experience_points: Vec<String>,
    pub meta: ResumeMeta,
    pub company_responsibilities: Vec<CompanyBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_from_array() {
        let list: StringList = serde_json::from_str(r#"[" a ", "b", "", "c"]"#).unwrap();
        assert_eq!(list.0, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_string_list_from_delimited_string() {
        let list: StringList = serde_json::from_str("\"a, b,,c\\nd\"").unwrap();
        assert_eq!(list.0, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_string_list_from_wrong_shape_is_empty() {
        let list: StringList = serde_json::from_str("42").unwrap();
        assert!(list.0.is_empty());
    }

    #[test]
    fn test_string_list_array_skips_non_string_items() {
        let list: StringList = serde_json::from_str(r#"["a", {"x": 1}, 7]"#).unwrap();
        assert_eq!(list.0, vec!["a", "7"]);
    }

    #[test]
    fn test_lenient_scalar_accepts_numbers() {
        let input: ResumeInput =
            serde_json::from_str(r#"{"mobile": 9999999999, "passoutYear": 2019}"#).unwrap();
        assert_eq!(input.mobile, "9999999999");
        assert_eq!(input.passout_year, "2019");
    }

    #[test]
    fn test_lenient_scalar_coerces_wrong_shape_to_empty() {
        let input: ResumeInput =
            serde_json::from_str(r#"{"fullName": {"first": "A"}, "email": null}"#).unwrap();
        assert_eq!(input.full_name, "");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_skills_alias_accepted() {
        let input: ResumeInput = serde_json::from_str(r#"{"skills": ["Wiring"]}"#).unwrap();
        assert_eq!(input.skills_selected.0, vec!["Wiring"]);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let input: ResumeInput = serde_json::from_str("{}").unwrap();
        assert!(input.companies.is_empty());
        assert!(input.languages.0.is_empty());
        assert_eq!(input.exp_type, "");
    }
}
