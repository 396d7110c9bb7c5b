//! Firestore REST document format.
//!
//! A document body looks like
//!
//! ```json
//! { "name": "projects/p/databases/(default)/documents/users/AbC123",
//!   "fields": { "name": { "stringValue": "Ana" }, "birthdate": { "stringValue": "" } } }
//! ```
//!
//! Every attribute is written as a `stringValue`; an absent birthdate is `""`.
//! Reading is lenient so documents written by other clients still load:
//! numbers and booleans are turned into their text form, a timestamp birthdate
//! into its UTC date, and nulls, maps, arrays and missing keys read as empty.
//! A gender or birthdate that still cannot be read is logged and left empty.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use store::models::DATE_FORMAT;
use store::{Field, Profile, Record, RecordId, StoreError};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocuments {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    message: String,
}

/// Request body for a create or overwrite.
pub fn encode(profile: &Profile) -> Value {
    let fields: Map<String, Value> = Field::ALL
        .into_iter()
        .map(|field| {
            let value = json!({ "stringValue": profile.get(field) });
            (field.key().to_string(), value)
        })
        .collect();
    json!({ "fields": fields })
}

/// Read a document back as a record.
///
/// Does not fail: a field this client cannot parse is logged and stays empty,
/// so one foreign document never hides the rest of the collection.
pub fn decode(doc: &Document) -> Record {
    let id = document_id(&doc.name);
    let mut profile = Profile::default();
    for field in Field::ALL {
        let Some(value) = doc.fields.get(field.key()) else {
            continue;
        };
        let text = match field {
            Field::Birthdate => birthdate_text(value),
            _ => value_text(value),
        };
        if let Err(e) = profile.set(field, &text) {
            warn!(%id, field = field.key(), error = %e, "Ignoring unreadable field");
        }
    }
    Record::new(id, profile)
}

/// A `timestampValue` birthdate reads as its UTC calendar date.
fn birthdate_text(value: &Value) -> String {
    let Some(ts) = value.get("timestampValue").and_then(Value::as_str) else {
        return value_text(value);
    };
    match DateTime::parse_from_rfc3339(ts) {
        Ok(at) => at
            .with_timezone(&Utc)
            .date_naive()
            .format(DATE_FORMAT)
            .to_string(),
        Err(_) => ts.to_string(),
    }
}

/// Text form of a single Firestore value.
pub fn value_text(value: &Value) -> String {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return String::new();
    };
    match (kind.as_str(), inner) {
        ("stringValue" | "integerValue" | "timestampValue", Value::String(s)) => s.clone(),
        ("integerValue" | "doubleValue", Value::Number(n)) => n.to_string(),
        ("doubleValue", Value::String(s)) => s.clone(),
        ("booleanValue", Value::Bool(b)) => b.to_string(),
        ("nullValue", _) => String::new(),
        (other, _) => {
            debug!(kind = other, "Reading unsupported Firestore value as empty");
            String::new()
        }
    }
}

/// Last path segment of a document's resource name.
pub fn document_id(name: &str) -> RecordId {
    RecordId::new(name.rsplit('/').next().unwrap_or(name))
}

/// Map a non-success HTTP answer to a store error.
///
/// `id` is the document the request targeted; a 404 on a document means the
/// record does not exist.
pub fn status_error(status: u16, body: &str, id: Option<&RecordId>) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    match (status, id) {
        (401 | 403, _) => StoreError::PermissionDenied(message),
        (404, Some(id)) => StoreError::NotFound(id.clone()),
        _ => StoreError::Rejected { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Gender;

    fn document(body: Value) -> Document {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_decode_full_document() {
        let doc = document(json!({
            "name": "projects/crud/databases/(default)/documents/users/AbC123",
            "fields": {
                "name": { "stringValue": "Ana" },
                "email": { "stringValue": "a@x.com" },
                "phone": { "stringValue": "555-0100" },
                "gender": { "stringValue": "female" },
                "job": { "stringValue": "Engineer" },
                "address": { "stringValue": "1 Main St" },
                "birthdate": { "stringValue": "1990-04-12" },
                "education": { "stringValue": "BSc" }
            },
            "createTime": "2024-01-01T00:00:00Z"
        }));

        let record = decode(&doc);
        assert_eq!(record.id, RecordId::new("AbC123"));
        assert_eq!(record.profile.name, "Ana");
        assert_eq!(record.profile.gender, Gender::Female);
        assert_eq!(record.profile.get(Field::Birthdate), "1990-04-12");
        assert_eq!(record.profile.education, "BSc");
    }

    #[test]
    fn test_decode_tolerates_missing_and_foreign_values() {
        let doc = document(json!({
            "name": "projects/crud/databases/(default)/documents/users/x1",
            "fields": {
                "name": { "stringValue": "Bo" },
                "phone": { "integerValue": "5550100" },
                "job": { "booleanValue": true },
                "address": { "mapValue": { "fields": {} } },
                "birthdate": { "nullValue": null },
                "gender": { "stringValue": "" }
            }
        }));

        let record = decode(&doc);
        assert_eq!(record.profile.name, "Bo");
        assert_eq!(record.profile.email, "");
        assert_eq!(record.profile.phone, "5550100");
        assert_eq!(record.profile.job, "true");
        assert_eq!(record.profile.address, "");
        assert_eq!(record.profile.gender, Gender::Unspecified);
        assert!(record.profile.birthdate.is_none());
    }

    #[test]
    fn test_decode_timestamp_birthdate_as_date() {
        let doc = document(json!({
            "name": "projects/crud/databases/(default)/documents/users/ts",
            "fields": {
                "name": { "stringValue": "Cy" },
                "birthdate": { "timestampValue": "1990-04-12T00:00:00Z" }
            }
        }));
        assert_eq!(decode(&doc).profile.get(Field::Birthdate), "1990-04-12");

        let doc = document(json!({
            "name": "projects/crud/databases/(default)/documents/users/ts2",
            "fields": { "birthdate": { "timestampValue": "1990-04-12T23:30:00-02:00" } }
        }));
        assert_eq!(decode(&doc).profile.get(Field::Birthdate), "1990-04-13");
    }

    #[test]
    fn test_decode_keeps_document_with_unreadable_fields() {
        let doc = document(json!({
            "name": "projects/crud/databases/(default)/documents/users/odd",
            "fields": {
                "name": { "stringValue": "Di" },
                "email": { "stringValue": "d@x.com" },
                "gender": { "stringValue": "non-binary" },
                "birthdate": { "stringValue": "next tuesday" }
            }
        }));

        let record = decode(&doc);
        assert_eq!(record.id, RecordId::new("odd"));
        assert_eq!(record.profile.name, "Di");
        assert_eq!(record.profile.email, "d@x.com");
        assert_eq!(record.profile.gender, Gender::Unspecified);
        assert!(record.profile.birthdate.is_none());
    }

    #[test]
    fn test_page_with_foreign_documents_decodes_every_record() {
        let page: ListDocuments = serde_json::from_value(json!({
            "documents": [
                {
                    "name": "projects/p/databases/(default)/documents/users/ok",
                    "fields": {
                        "name": { "stringValue": "Ana" },
                        "gender": { "stringValue": "female" }
                    }
                },
                {
                    "name": "projects/p/databases/(default)/documents/users/ts",
                    "fields": { "birthdate": { "timestampValue": "1990-04-12T00:00:00Z" } }
                },
                {
                    "name": "projects/p/databases/(default)/documents/users/g",
                    "fields": { "gender": { "stringValue": "non-binary" } }
                }
            ]
        }))
        .unwrap();

        let records: Vec<Record> = page.documents.iter().map(decode).collect();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ok", "ts", "g"]);
        assert_eq!(records[0].profile.gender, Gender::Female);
        assert_eq!(records[1].profile.get(Field::Birthdate), "1990-04-12");
        assert_eq!(records[2].profile.gender, Gender::Unspecified);
    }

    #[test]
    fn test_encode_writes_every_field() {
        let mut profile = Profile::new("Ana", "a@x.com");
        profile.gender = Gender::Other;

        let body = encode(&profile);
        let fields = body["fields"].as_object().unwrap();
        assert_eq!(fields.len(), Field::ALL.len());
        assert_eq!(fields["name"], json!({ "stringValue": "Ana" }));
        assert_eq!(fields["gender"], json!({ "stringValue": "other" }));
        assert_eq!(fields["phone"], json!({ "stringValue": "" }));
        assert_eq!(fields["birthdate"], json!({ "stringValue": "" }));

        profile.set(Field::Birthdate, "2001-02-03").unwrap();
        assert_eq!(
            encode(&profile)["fields"]["birthdate"],
            json!({ "stringValue": "2001-02-03" })
        );
    }

    #[test]
    fn test_encoded_profile_decodes_to_itself() {
        let mut profile = Profile::new("Ana", "a@x.com");
        profile.set(Field::Birthdate, "1990-04-12").unwrap();
        profile.gender = Gender::Male;

        let doc = document(json!({
            "name": "projects/p/databases/(default)/documents/users/z",
            "fields": encode(&profile)["fields"].clone(),
        }));
        assert_eq!(decode(&doc).profile, profile);
    }

    #[test]
    fn test_list_response_without_documents() {
        let page: ListDocuments = serde_json::from_str("{}").unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_status_error_mapping() {
        let body = r#"{"error":{"code":404,"message":"No document to update","status":"NOT_FOUND"}}"#;
        let id = RecordId::new("gone");

        assert_eq!(
            status_error(404, body, Some(&id)),
            StoreError::NotFound(id.clone())
        );
        assert_eq!(
            status_error(404, body, None),
            StoreError::Rejected {
                status: 404,
                message: "No document to update".to_string()
            }
        );
        assert!(matches!(
            status_error(403, "forbidden\n", Some(&id)),
            StoreError::PermissionDenied(m) if m == "forbidden"
        ));
        assert!(matches!(
            status_error(500, "", None),
            StoreError::Rejected { status: 500, .. }
        ));
    }
}
