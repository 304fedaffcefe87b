pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod models;
pub mod query;
pub mod source;

mod memory;
pub use memory::{MemorySource, RequestRecord};

pub use config::{AppConfig, SearchMode};
pub use error::{SourceError, SyncError};
pub use form::{FieldKind, FieldSpec, FormErrors, FormValues};
pub use list::{DeleteOutcome, FetchTicket, ListHandle, ListState, SaveOutcome, Submission, ViewMode};
pub use models::{Cell, ProductDraft, ProductRecord, RecordId, Resource, UserDraft, UserRecord};
pub use query::ListQuery;
pub use source::{list_matching, RecordSource};
