mod config;
mod device;
mod error;
mod garden;
mod particle;
mod primitives;
mod registry;
mod runtime;
mod schedule;
mod stage;

use dioxus::prelude::*;

#[allow(non_snake_case)]
fn App() -> Element {
    // Boot once; the effects live on the page body, outside this tree
    use_hook(|| match runtime::boot() {
        Ok(garden) => {
            spawn(garden.drive());
        }
        Err(err) => tracing::warn!(%err, "garden effects unavailable"),
    });

    rsx! {
        div { id: "main" }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
