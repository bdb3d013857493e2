use dioxus::logger::tracing::Level;

use chatdeck::App;

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}
