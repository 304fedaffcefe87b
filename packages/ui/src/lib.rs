//! Shared UI for the recordbook front end: the generic list view, its table,
//! form and search bar, the modal overlay and toast notifications.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const RECORDS_CSS: Asset = asset!("/assets/records.css");

mod app_context;
pub use app_context::{use_app_context, AppContext};

pub mod notifications;
pub use notifications::{notify, report_error, use_notifications, NoticeLevel, NotificationProvider};

mod confirm;
pub use confirm::confirm;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod search_bar;
pub use search_bar::SearchBar;

mod record_table;
pub use record_table::{RecordTable, TableRow};

mod record_form;
pub use record_form::RecordForm;

mod navbar;
pub use navbar::Navbar;

pub mod views;
pub use views::{CategoriesView, ProductsView};
