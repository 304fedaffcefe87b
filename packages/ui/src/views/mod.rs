mod record_list;
pub use record_list::record_list_view;

mod categories;
pub use categories::CategoriesView;

mod products;
pub use products::ProductsView;
