use shared::{RestaurantFormState, RestaurantUiConfig, RestaurantValidationError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forms::RestaurantFields;
use crate::routes::Route;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RestaurantFormPageProps {
    /// Some(id) when reached via the edit route
    #[prop_or_default]
    pub id: Option<i64>,
}

/// Standalone form page: creates a record, or updates one when reached
/// via the edit route. Navigates back to the list on success; failures
/// are logged and leave the form as-is.
#[function_component(RestaurantFormPage)]
pub fn restaurant_form_page(props: &RestaurantFormPageProps) -> Html {
    let form = use_state(RestaurantFormState::default);
    let form_errors = use_state(Vec::<RestaurantValidationError>::new);
    let is_submitting = use_state(|| false);
    let api_client = ApiClient::new();
    let navigator = use_navigator().expect("rendered outside a router");

    // When editing, pull the record into the form. The REST surface has
    // no single-record GET, so fetch the list and select by id.
    {
        let form = form.clone();
        let api_client = api_client.clone();
        let navigator = navigator.clone();

        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match api_client.get_restaurants().await {
                        Ok(restaurants) => {
                            match restaurants.into_iter().find(|r| r.id == id) {
                                Some(restaurant) => {
                                    form.set(RestaurantFormState::load(&restaurant));
                                }
                                None => {
                                    gloo::console::warn!(
                                        "No restaurant with id",
                                        id as f64,
                                        "- returning to list"
                                    );
                                    navigator.push(&Route::Restaurants);
                                }
                            }
                        }
                        Err(e) => {
                            gloo::console::error!("Failed to load restaurant for editing:", e);
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: RestaurantFormState| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let form_errors = form_errors.clone();
        let is_submitting = is_submitting.clone();
        let api_client = api_client.clone();
        let navigator = navigator.clone();
        let editing_id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = form.validate(&RestaurantUiConfig::default());
            if !validation.is_valid {
                form_errors.set(validation.errors);
                return;
            }
            form_errors.set(Vec::new());
            is_submitting.set(true);

            let draft = form.to_draft();
            let is_submitting = is_submitting.clone();
            let api_client = api_client.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api_client.update_restaurant(id, draft).await.map(|_| ()),
                    None => api_client.create_restaurant(draft).await.map(|_| ()),
                };

                match result {
                    Ok(()) => navigator.push(&Route::Restaurants),
                    Err(e) => match editing_id {
                        Some(_) => gloo::console::error!("Failed to update restaurant:", e),
                        None => gloo::console::error!("Failed to create restaurant:", e),
                    },
                }

                is_submitting.set(false);
            });
        })
    };

    let is_editing = props.id.is_some();

    html! {
        <section class="restaurant-form-page">
            <div class="form-header">
                <h2>
                    {if is_editing { "Edit Restaurant" } else { "Add New Restaurant" }}
                </h2>
                <Link<Route> classes="btn btn-secondary" to={Route::Restaurants}>
                    {"Back to List"}
                </Link<Route>>
            </div>

            <form class="restaurant-form" onsubmit={on_submit}>
                <RestaurantFields
                    form={(*form).clone()}
                    errors={(*form_errors).clone()}
                    disabled={*is_submitting}
                    on_change={on_change}
                />

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting {
                        "Saving..."
                    } else if is_editing {
                        "Update Restaurant"
                    } else {
                        "Add Restaurant"
                    }}
                </button>
            </form>
        </section>
    }
}
