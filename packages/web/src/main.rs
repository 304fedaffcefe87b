use dioxus::prelude::*;

use ui::{AppContext, CategoriesView, Navbar, NotificationProvider, ProductsView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/categories")]
        Categories {},
        #[route("/products")]
        Products {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../recordbook.toml");

fn main() {
    dioxus::launch(App);
}

fn load_context() -> Result<AppContext, String> {
    api::load_config(CONFIG)
        .and_then(AppContext::from_config)
        .map_err(|err| {
            tracing::error!(error = %err, "invalid configuration");
            err.to_string()
        })
}

#[component]
fn App() -> Element {
    let context = use_hook(load_context);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match context {
            Ok(context) => rsx! { Configured { context } },
            Err(message) => rsx! {
                div {
                    class: "config-error",
                    role: "alert",
                    h1 { "Configuration error" }
                    p { "{message}" }
                }
            },
        }
    }
}

/// Provides the shared client and notifications, then hands over to the router.
#[component]
fn Configured(context: AppContext) -> Element {
    let dismiss_after_secs = context.config.notifications.dismiss_after_secs;
    use_context_provider(|| context.clone());

    rsx! {
        NotificationProvider {
            dismiss_after_secs,
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Categories {}, active_class: "active", "Categories" }
            Link { to: Route::Products {}, active_class: "active", "Products" }
        }
        Outlet::<Route> {}
    }
}

/// `/` shows the category list directly.
#[component]
fn Home() -> Element {
    rsx! { CategoriesView {} }
}

#[component]
fn Categories() -> Element {
    rsx! { CategoriesView {} }
}

#[component]
fn Products() -> Element {
    rsx! { ProductsView {} }
}
