use dioxus::prelude::*;
use records::UserRecord;

use super::record_list_view;

/// The category page lists `users` records.
#[component]
pub fn CategoriesView() -> Element {
    record_list_view::<UserRecord>("Categories")
}
