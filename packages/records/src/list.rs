//! # List view state machine
//!
//! [`ListState`] is everything a list view owns: the last fetched records, the
//! search text, the modal mode with its form, and the generation counter that
//! orders fetches. Transitions are plain methods so the view layer stays a thin
//! shell around them:
//!
//! ```text
//!              open_create()                open_edit(r)
//!  CreateOpen <------------- Displaying -------------> EditOpen(r.id)
//!       |                     ^    ^                        |
//!       +--- close() / -------+    +------ close() / -------+
//!            finish_submit()               finish_submit()
//! ```
//!
//! The async helpers ([`load`], [`reload`], [`open_edit_by_id`], [`save`],
//! [`remove`]) run each user action end to end: request, state transition and
//! list reload. They reach the state through a [`ListHandle`], so a view can
//! keep it in a reactive cell and never hold a borrow across a request.
//!
//! ## Fetch ordering
//!
//! Each fetch takes a [`FetchTicket`]. Only the most recently issued ticket may
//! replace the records, so a slow response to an old search can never overwrite
//! a newer one.

use crate::config::SearchMode;
use crate::error::{SourceError, SyncError};
use crate::form::{FormErrors, FormValues};
use crate::models::{RecordId, Resource};
use crate::source::{list_matching, RecordSource};

/// Which screen the list view is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Displaying,
    CreateOpen,
    /// The modal edits the record with this id.
    EditOpen(RecordId),
}

/// Proof that a fetch was issued; hand it back with the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub search: String,
}

/// A validated form, ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<D> {
    Create(D),
    Update(RecordId, D),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R: Resource> {
    records: Vec<R>,
    search: String,
    mode: ViewMode,
    form: FormValues,
    errors: FormErrors,
    issued: u64,
    loading: bool,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            mode: ViewMode::Displaying,
            form: FormValues::new(),
            errors: FormErrors::new(),
            issued: 0,
            loading: false,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Id of the record open for edit; `None` means the next submit creates.
    pub fn selection(&self) -> Option<&RecordId> {
        match &self.mode {
            ViewMode::EditOpen(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.mode != ViewMode::Displaying
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Start a fetch for the current search text.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket {
            generation: self.issued,
            search: self.search.clone(),
        }
    }

    /// Change the search text and start the fetch for it.
    pub fn set_search(&mut self, search: impl Into<String>) -> FetchTicket {
        self.search = search.into();
        self.begin_fetch()
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.issued
    }

    /// Replace the list with a fetch result. Returns `false` (and changes
    /// nothing) when a newer fetch has been issued since.
    pub fn apply_fetch(&mut self, ticket: &FetchTicket, records: Vec<R>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.records = records;
        self.loading = false;
        true
    }

    /// Note that a fetch failed. The list keeps its last good contents.
    /// Returns whether the failure belongs to the latest fetch.
    pub fn fail_fetch(&mut self, ticket: &FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn open_create(&mut self) {
        self.mode = ViewMode::CreateOpen;
        self.form.clear();
        self.errors = FormErrors::new();
    }

    /// Open the modal on a freshly fetched record, pre-filling every field.
    pub fn open_edit(&mut self, record: &R) {
        self.mode = ViewMode::EditOpen(record.id().clone());
        self.form = record.to_form();
        self.errors = FormErrors::new();
    }

    /// Dismiss the modal without sending anything.
    pub fn close(&mut self) {
        self.mode = ViewMode::Displaying;
        self.form.clear();
        self.errors = FormErrors::new();
    }

    /// Update one input. Editing a field clears its error.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(field);
    }

    /// Validate the form. On failure the errors are kept for display and
    /// nothing should be sent.
    pub fn prepare_submit(&mut self) -> Result<Submission<R::Draft>, FormErrors> {
        match R::draft_from_form(&self.form) {
            Ok(draft) => {
                self.errors = FormErrors::new();
                Ok(match self.selection() {
                    Some(id) => Submission::Update(id.clone(), draft),
                    None => Submission::Create(draft),
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// A submission was accepted by the server: close and reset.
    pub fn finish_submit(&mut self) {
        self.close();
    }

    /// Text of the delete confirmation prompt.
    pub fn confirm_message() -> String {
        format!("Are you sure you want to delete this {}?", R::NOUN)
    }
}

/// Short-lived mutable access to a [`ListState`].
pub trait ListHandle<R: Resource> {
    fn update<T>(&mut self, f: impl FnOnce(&mut ListState<R>) -> T) -> T;
}

impl<R: Resource> ListHandle<R> for ListState<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut ListState<R>) -> T) -> T {
        f(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome<R> {
    /// The form did not validate; the errors are in the state.
    Invalid,
    Saved(R),
}

/// Send a validated submission: `POST` for a create, `PUT` for an update.
pub async fn submit<R: Resource, S: RecordSource>(
    source: &S,
    submission: &Submission<R::Draft>,
) -> Result<R, SourceError> {
    match submission {
        Submission::Create(draft) => source.create::<R>(draft).await,
        Submission::Update(id, draft) => source.update::<R>(id, draft).await,
    }
}

/// Delete a record once the user has answered the confirmation prompt.
/// A negative answer issues no request.
pub async fn delete<R: Resource, S: RecordSource>(
    source: &S,
    id: &RecordId,
    confirmed: bool,
) -> Result<DeleteOutcome, SourceError> {
    if !confirmed {
        return Ok(DeleteOutcome::Cancelled);
    }
    source.delete::<R>(id).await?;
    tracing::info!(resource = R::PATH, %id, "record deleted");
    Ok(DeleteOutcome::Deleted)
}

async fn run_fetch<R, S, H>(
    handle: &mut H,
    source: &S,
    ticket: FetchTicket,
    mode: SearchMode,
) -> Result<(), SourceError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    match list_matching::<R, S>(source, &ticket.search, mode).await {
        Ok(records) => {
            handle.update(|state| state.apply_fetch(&ticket, records));
            Ok(())
        }
        Err(err) => {
            // A failure that a newer fetch has already superseded is not reported.
            if handle.update(|state| state.fail_fetch(&ticket)) {
                Err(err)
            } else {
                Ok(())
            }
        }
    }
}

/// Set the search text and fetch the matching records.
pub async fn load<R, S, H>(
    handle: &mut H,
    source: &S,
    search: String,
    mode: SearchMode,
) -> Result<(), SourceError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    let ticket = handle.update(|state| state.set_search(search));
    run_fetch::<R, S, H>(handle, source, ticket, mode).await
}

/// Fetch again for the current search text.
pub async fn reload<R, S, H>(handle: &mut H, source: &S, mode: SearchMode) -> Result<(), SourceError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    let ticket = handle.update(|state| state.begin_fetch());
    run_fetch::<R, S, H>(handle, source, ticket, mode).await
}

/// Fetch a single record and open the edit modal on it.
pub async fn open_edit_by_id<R, S, H>(
    handle: &mut H,
    source: &S,
    id: &RecordId,
) -> Result<(), SourceError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    let record = source.get::<R>(id).await?;
    handle.update(|state| state.open_edit(&record));
    Ok(())
}

/// Validate the form, send it, close the modal and reload the list.
///
/// Invalid input sends nothing. A failed request leaves the modal open with
/// the user's input.
pub async fn save<R, S, H>(
    handle: &mut H,
    source: &S,
    mode: SearchMode,
) -> Result<SaveOutcome<R>, SyncError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    let Ok(submission) = handle.update(|state| state.prepare_submit()) else {
        return Ok(SaveOutcome::Invalid);
    };
    let record = submit::<R, S>(source, &submission)
        .await
        .map_err(SyncError::Mutation)?;
    handle.update(|state| state.finish_submit());
    reload::<R, S, H>(handle, source, mode)
        .await
        .map_err(SyncError::Reload)?;
    Ok(SaveOutcome::Saved(record))
}

/// Delete after confirmation and reload the list. A cancelled delete sends
/// nothing and leaves the list as it is.
pub async fn remove<R, S, H>(
    handle: &mut H,
    source: &S,
    id: &RecordId,
    confirmed: bool,
    mode: SearchMode,
) -> Result<DeleteOutcome, SyncError>
where
    R: Resource,
    S: RecordSource,
    H: ListHandle<R>,
{
    let outcome = delete::<R, S>(source, id, confirmed)
        .await
        .map_err(SyncError::Mutation)?;
    if outcome == DeleteOutcome::Deleted {
        reload::<R, S, H>(handle, source, mode)
            .await
            .map_err(SyncError::Reload)?;
    }
    Ok(outcome)
}
