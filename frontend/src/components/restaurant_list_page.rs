use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forms::RestaurantFields;
use crate::components::pagination::Pagination;
use crate::components::restaurant_table::RestaurantTable;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_restaurants::use_restaurants;
use crate::routes::Route;
use crate::services::api::ApiClient;

/// The main view: searchable, paginated restaurant list with an inline
/// create-or-edit form next to it.
#[function_component(RestaurantListPage)]
pub fn restaurant_list_page() -> Html {
    let api_client = ApiClient::new();
    let restaurants = use_restaurants(&api_client);
    let state = restaurants.state;
    let actions = restaurants.actions;

    // Load the list once on mount
    {
        let refresh = actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_cancel = {
        let cancel_edit = actions.cancel_edit.clone();
        Callback::from(move |_: MouseEvent| cancel_edit.emit(()))
    };

    let is_editing = state.list.is_editing();

    html! {
        <div class="restaurant-list-page">
            <section class="list-section">
                <div class="list-header">
                    <h2>{"Restaurants"}</h2>
                    <Link<Route> classes="btn btn-primary" to={Route::NewRestaurant}>
                        {"Add New Restaurant"}
                    </Link<Route>>
                </div>

                <SearchBar
                    query={state.list.query.clone()}
                    on_query_change={actions.set_query.clone()}
                />

                {if state.loading {
                    html! { <div class="loading">{"Loading restaurants..."}</div> }
                } else {
                    html! {
                        <RestaurantTable
                            restaurants={state.list.page_slice()}
                            on_edit={actions.start_edit.clone()}
                            on_delete={actions.delete.clone()}
                        />
                    }
                }}

                <Pagination
                    current_page={state.list.current_page}
                    total_pages={state.list.total_pages()}
                    on_change_page={actions.change_page.clone()}
                />
            </section>

            <section class="editor-section">
                <h2>
                    {if is_editing { "Edit Restaurant" } else { "Add Restaurant" }}
                </h2>

                <form class="restaurant-form" onsubmit={on_submit}>
                    <RestaurantFields
                        form={state.form.clone()}
                        errors={state.form_errors.clone()}
                        disabled={state.saving}
                        on_change={actions.update_form.clone()}
                    />

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={state.saving}>
                            {if state.saving {
                                "Saving..."
                            } else if is_editing {
                                "Update Restaurant"
                            } else {
                                "Add Restaurant"
                            }}
                        </button>

                        {if is_editing {
                            html! {
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    onclick={on_cancel}
                                >
                                    {"Cancel"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </form>
            </section>
        </div>
    }
}
