use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod routes;
mod services;

use routes::{switch, Route};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    // Connection status for the footer
    let backend_connected = use_state(|| false);
    let backend_endpoint = use_state(|| String::from("Checking..."));

    // Probe the backend once on startup
    use_effect_with((), {
        let backend_connected = backend_connected.clone();
        let backend_endpoint = backend_endpoint.clone();

        move |_| {
            spawn_local(async move {
                let api_client = ApiClient::new();
                match api_client.test_connection().await {
                    Ok(()) => {
                        backend_connected.set(true);
                        backend_endpoint.set("localhost:3000".to_string());
                    }
                    Err(e) => {
                        backend_connected.set(false);
                        backend_endpoint.set("Connection failed".to_string());
                        gloo::console::error!("Failed to connect to backend:", e);
                    }
                }
            });

            || ()
        }
    });

    html! {
        <BrowserRouter>
            <header class="header">
                <div class="container">
                    <h1>{"Restaurant Manager"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <Switch<Route> render={switch} />
                </div>
            </main>

            <div class="connection-status">
                {if *backend_connected {
                    format!("Connected to {}", *backend_endpoint)
                } else {
                    (*backend_endpoint).clone()
                }}
            </div>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
