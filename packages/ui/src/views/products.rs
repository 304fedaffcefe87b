use dioxus::prelude::*;
use records::ProductRecord;

use super::record_list_view;

#[component]
pub fn ProductsView() -> Element {
    record_list_view::<ProductRecord>("Products")
}
