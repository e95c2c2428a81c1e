use dioxus::prelude::*;
use ui::ChangeOrderWizard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/record/:record_id")]
    Record { record_id: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            class: "missing-record",
            "A record identifier is required. Open the wizard from an order record."
        }
    }
}

#[component]
fn Record(record_id: String) -> Element {
    rsx! {
        div {
            ChangeOrderWizard { record_id }
        }
    }
}
