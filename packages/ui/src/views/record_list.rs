use dioxus::prelude::*;
use records::list::{load, open_edit_by_id, remove, save};
use records::{DeleteOutcome, ListHandle, ListState, RecordId, Resource, SaveOutcome, SyncError};

use crate::app_context::use_app_context;
use crate::notifications::{notify, report_error, use_notifications, NoticeLevel};
use crate::{confirm, ModalOverlay, RecordForm, RecordTable, SearchBar, TableRow, RECORDS_CSS};

const LOAD_FAILED: &str = "Could not load records";

/// Lets the list helpers reach the signal one short borrow at a time.
struct SignalHandle<R: Resource>(Signal<ListState<R>>);

impl<R: Resource> ListHandle<R> for SignalHandle<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut ListState<R>) -> T) -> T {
        f(&mut *self.0.write())
    }
}

/// List view shared by every resource.
///
/// Fetches on mount and whenever the search text changes; saves and deletes
/// reload the list themselves. Called from a concrete component such as
/// [`super::CategoriesView`], whose scope owns the hooks used here.
pub fn record_list_view<R: Resource>(heading: &'static str) -> Element {
    let app = use_app_context();
    let mut notices = use_notifications();
    let mut state = use_signal(ListState::<R>::new);
    let mut search = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mode = app.config.search.mode;

    let list_client = app.client.clone();
    let _list = use_resource(move || {
        let client = list_client.clone();
        let text = search();
        async move {
            let mut handle = SignalHandle(state);
            if let Err(err) = load(&mut handle, &client, text, mode).await {
                report_error(&mut notices, LOAD_FAILED, &err);
            }
        }
    });

    let edit_client = app.client.clone();
    let on_edit = move |id: RecordId| {
        let client = edit_client.clone();
        spawn(async move {
            let mut handle = SignalHandle(state);
            if let Err(err) = open_edit_by_id(&mut handle, &client, &id).await {
                report_error(&mut notices, "Could not open record", &err);
            }
        });
    };

    let submit_client = app.client.clone();
    let on_submit = move |_| {
        if saving() {
            return;
        }
        let client = submit_client.clone();
        saving.set(true);
        spawn(async move {
            let mut handle = SignalHandle(state);
            match save(&mut handle, &client, mode).await {
                Ok(SaveOutcome::Saved(_)) => notify(&mut notices, NoticeLevel::Success, "Saved"),
                Ok(SaveOutcome::Invalid) => {}
                Err(SyncError::Mutation(err)) => {
                    report_error(&mut notices, "Could not save record", &err);
                }
                Err(SyncError::Reload(err)) => {
                    notify(&mut notices, NoticeLevel::Success, "Saved");
                    report_error(&mut notices, LOAD_FAILED, &err);
                }
            }
            saving.set(false);
        });
    };

    let delete_client = app.client.clone();
    let on_delete = move |id: RecordId| {
        let confirmed = confirm(&ListState::<R>::confirm_message());
        let client = delete_client.clone();
        spawn(async move {
            let mut handle = SignalHandle(state);
            match remove(&mut handle, &client, &id, confirmed, mode).await {
                Ok(DeleteOutcome::Deleted) => notify(&mut notices, NoticeLevel::Success, "Deleted"),
                Ok(DeleteOutcome::Cancelled) => {}
                Err(SyncError::Mutation(err)) => {
                    report_error(&mut notices, "Could not delete record", &err);
                }
                Err(SyncError::Reload(err)) => {
                    notify(&mut notices, NoticeLevel::Success, "Deleted");
                    report_error(&mut notices, LOAD_FAILED, &err);
                }
            }
        });
    };

    let current = state.read();
    let rows: Vec<TableRow> = current.records().iter().map(TableRow::from_record).collect();
    let loading = current.is_loading();
    let modal_open = current.is_modal_open();
    let editing = current.selection().is_some();
    let values = current.form().clone();
    let errors = current.errors().clone();
    drop(current);
    let modal_label = if editing {
        format!("Edit {}", R::NOUN)
    } else {
        format!("New {}", R::NOUN)
    };

    rsx! {
        document::Stylesheet { href: RECORDS_CSS }

        div {
            class: "container",
            h1 { class: "view-title", "{heading}" }

            SearchBar {
                value: search(),
                on_input: move |text: String| search.set(text),
                on_add: move |_| state.write().open_create(),
            }

            RecordTable {
                columns: R::columns(),
                rows,
                loading,
                on_edit,
                on_delete,
            }

            if modal_open {
                ModalOverlay {
                    label: modal_label,
                    on_close: move |_| state.write().close(),
                    RecordForm {
                        fields: R::form_fields(),
                        values,
                        errors,
                        editing,
                        saving: saving(),
                        on_input: move |(field, value): (String, String)| {
                            state.write().set_field(&field, value);
                        },
                        on_submit,
                        on_close: move |_| state.write().close(),
                    }
                }
            }
        }
    }
}
