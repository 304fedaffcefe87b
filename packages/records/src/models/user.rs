//! The `users` resource, shown in the categories view.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Cell, RecordId, Resource};
use crate::form::{FieldKind, FieldSpec, FormErrors, FormReader, FormValues};

/// A user as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub last_name: String,
    /// Image URL. Some servers call this field `avatar`.
    #[serde(default, alias = "avatar", deserialize_with = "super::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub age: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,
}

/// Create/replace payload for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub image: String,
    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: i64,
    #[validate(email(message = "Email must be a valid email"))]
    pub email: String,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("first_name", "Firstname", FieldKind::Text),
    FieldSpec::new("last_name", "LastName", FieldKind::Text),
    FieldSpec::new("image", "Image", FieldKind::Url),
    FieldSpec::new("age", "Age", FieldKind::Number),
    FieldSpec::new("email", "Email", FieldKind::Email),
];

impl Resource for UserRecord {
    type Draft = UserDraft;

    const PATH: &'static str = "users";
    const NOUN: &'static str = "user";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["firstName", "lastName"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("first_name", self.first_name.as_str())
            .with("last_name", self.last_name.as_str())
            .with("image", self.image.as_str())
            .with("age", self.age.to_string())
            .with("email", self.email.as_str())
    }

    fn draft_from_form(values: &FormValues) -> Result<UserDraft, FormErrors> {
        let mut reader = FormReader::new(values);
        let draft = UserDraft {
            first_name: reader.required_text("first_name", "First name"),
            last_name: reader.required_text("last_name", "Last name"),
            image: reader.text("image"),
            age: reader.integer("age", "Age"),
            email: reader.required_text("email", "Email"),
        };
        reader.finish(draft)
    }

    fn columns() -> &'static [&'static str] {
        &["First Name", "Last Name", "Image", "Age", "Email address"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.first_name.clone()),
            Cell::Text(self.last_name.clone()),
            Cell::Image(self.image.clone()),
            Cell::Text(self.age.to_string()),
            Cell::Text(self.email.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormValues {
        FormValues::new()
            .with("first_name", "Bo")
            .with("last_name", "Berg")
            .with("image", "https://img.example/bo.png")
            .with("age", "25")
            .with("email", "b@x.com")
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = UserRecord::draft_from_form(&valid_form()).unwrap();
        assert_eq!(draft.first_name, "Bo");
        assert_eq!(draft.age, 25);
        assert_eq!(draft.email, "b@x.com");
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let form = valid_form().with("age", "-1");
        let errors = UserRecord::draft_from_form(&form).unwrap_err();
        assert_eq!(errors.get("age"), Some("Age must not be negative"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let form = valid_form().with("email", "b-at-x.com");
        let errors = UserRecord::draft_from_form(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid email"));
    }

    #[test]
    fn test_required_fields_report_once_each() {
        let errors = UserRecord::draft_from_form(&FormValues::new()).unwrap_err();
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("last_name"), Some("Last name is required"));
        assert_eq!(errors.get("age"), Some("Age is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(!errors.contains("image"));
    }

    #[test]
    fn test_to_form_covers_every_field() {
        let user = UserRecord {
            id: RecordId::new("1"),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            image: "https://img.example/ann.png".into(),
            age: 30,
            email: "a@x.com".into(),
        };
        let form = user.to_form();
        for field in UserRecord::form_fields() {
            assert!(!form.get(field.name).is_empty(), "{} not filled", field.name);
        }
        assert_eq!(form.get("age"), "30");
        assert_eq!(UserRecord::draft_from_form(&form).unwrap().last_name, "Lee");
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{"id":"3","firstName":"Ann","lastName":"Lee","avatar":"a.png","age":30,"email":"a@x.com"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.image, "a.png");
        assert_eq!(user.id.as_str(), "3");

        let draft = UserDraft {
            first_name: "Bo".into(),
            last_name: "Berg".into(),
            image: String::new(),
            age: 25,
            email: "b@x.com".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["firstName"], "Bo");
        assert_eq!(value["age"], 25);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{"id":4,"firstName":null,"lastName":"Lee","image":null,"age":null,"email":null}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "4");
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "Lee");
        assert_eq!(user.image, "");
        assert_eq!(user.age, 0);
    }
}
