//! The `products` resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Cell, RecordId, Resource};
use crate::form::{FieldKind, FieldSpec, FormErrors, FormReader, FormValues};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub image: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    pub description: String,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("image", "Image", FieldKind::Url),
    FieldSpec::new("price", "Price", FieldKind::Number),
    FieldSpec::new("description", "Description", FieldKind::Text),
];

impl Resource for ProductRecord {
    type Draft = ProductDraft;

    const PATH: &'static str = "products";
    const NOUN: &'static str = "product";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", self.title.as_str())
            .with("image", self.image.as_str())
            .with("price", self.price.to_string())
            .with("description", self.description.as_str())
    }

    fn draft_from_form(values: &FormValues) -> Result<ProductDraft, FormErrors> {
        let mut reader = FormReader::new(values);
        let draft = ProductDraft {
            title: reader.required_text("title", "Title"),
            image: reader.text("image"),
            price: reader.number("price", "Price"),
            description: reader.text("description"),
        };
        reader.finish(draft)
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Image", "Price", "Description"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.title.clone()),
            Cell::Image(self.image.clone()),
            Cell::Text(format!("{:.2}", self.price)),
            Cell::Text(self.description.clone()),
        ]
    }
}
