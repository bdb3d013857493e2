use dioxus::{logger::tracing::warn, prelude::*};

pub mod app_settings;
pub mod conversation;
pub mod message;
pub mod profile;
pub mod tutorial;
mod ui;

use app_settings::ChatSettings;
use ui::home::ChatScreen;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ChatSettings::default()));
    let init = use_resource(|| async {
        anyhow::Ok(())
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    ChatScreen {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component. Applies the theme class from the app settings.
#[component]
fn Layout() -> Element {
    let settings = consume_context::<Signal<ChatSettings>>();
    let theme_class = if settings.read().dark_mode {
        "app dark"
    } else {
        "app"
    };
    rsx! {
        div { class: "{theme_class}",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    warn!("navigation to unknown route: /{}", segments.join("/"));
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::ChatScreen {}, "Go To Home" }
    }
}
