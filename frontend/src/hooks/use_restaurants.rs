use std::rc::Rc;

use shared::{
    RestaurantFormState, RestaurantListState, RestaurantUiConfig, RestaurantValidationError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Mutations of the list view state, applied through a reducer so that
/// async completions always see the latest state.
pub enum ListAction {
    Loaded(Vec<shared::Restaurant>),
    QueryChanged(String),
    PageChanged(usize),
    EditStarted(i64),
    EditCancelled,
}

/// Reducer wrapper around the shared list view state.
#[derive(Default, PartialEq)]
pub struct ListStore {
    pub state: RestaurantListState,
}

impl Reducible for ListStore {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: ListAction) -> Rc<Self> {
        let mut next = self.state.clone();
        match action {
            ListAction::Loaded(restaurants) => next.set_restaurants(restaurants),
            ListAction::QueryChanged(query) => next.set_query(query),
            ListAction::PageChanged(page) => next.change_page(page),
            ListAction::EditStarted(id) => next.start_edit(id),
            ListAction::EditCancelled => next.cancel_edit(),
        }
        Rc::new(ListStore { state: next })
    }
}

#[derive(Clone)]
pub struct RestaurantsState {
    pub list: RestaurantListState,
    pub form: RestaurantFormState,
    pub form_errors: Vec<RestaurantValidationError>,
    pub loading: bool,
    pub saving: bool,
}

pub struct UseRestaurantsResult {
    pub state: RestaurantsState,
    pub actions: UseRestaurantsActions,
}

#[derive(Clone)]
pub struct UseRestaurantsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub delete: Callback<i64>,
    pub set_query: Callback<String>,
    pub change_page: Callback<usize>,
    pub start_edit: Callback<i64>,
    pub cancel_edit: Callback<()>,
    pub update_form: Callback<RestaurantFormState>,
}

/// Hook owning the list page state: the fetched records with their
/// filter/page/edit selection, and the inline create-or-update form.
///
/// All network failures are logged to the console and otherwise ignored;
/// mutations refresh the full list instead of patching it.
#[hook]
pub fn use_restaurants(api_client: &ApiClient) -> UseRestaurantsResult {
    let store = use_reducer(ListStore::default);
    let form = use_state(RestaurantFormState::default);
    let form_errors = use_state(Vec::<RestaurantValidationError>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    // Refresh the full list from the backend
    let refresh = {
        let api_client = api_client.clone();
        let store = store.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let store = store.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_restaurants().await {
                    Ok(restaurants) => {
                        store.dispatch(ListAction::Loaded(restaurants));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch restaurants:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    // Create-or-update from the inline form, then refresh and clear the
    // edit selection. Validation failures block the call; network
    // failures are logged and leave the form as-is.
    let submit = {
        let api_client = api_client.clone();
        let store = store.clone();
        let form = form.clone();
        let form_errors = form_errors.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let config = RestaurantUiConfig::default();
            let validation = form.validate(&config);
            if !validation.is_valid {
                form_errors.set(validation.errors);
                return;
            }
            form_errors.set(Vec::new());

            let api_client = api_client.clone();
            let store = store.clone();
            let form = form.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let draft = form.to_draft();
            let editing_id = store.state.editing_id;

            spawn_local(async move {
                saving.set(true);

                let result = match editing_id {
                    Some(id) => api_client.update_restaurant(id, draft).await.map(|_| ()),
                    None => api_client.create_restaurant(draft).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        form.set(RestaurantFormState::default());
                        store.dispatch(ListAction::EditCancelled);
                        refresh.emit(());
                    }
                    Err(e) => match editing_id {
                        Some(_) => gloo::console::error!("Failed to update restaurant:", e),
                        None => gloo::console::error!("Failed to create restaurant:", e),
                    },
                }

                saving.set(false);
            });
        })
    };

    // Delete after interactive confirmation, then refresh
    let delete = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();

        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this restaurant?") {
                return;
            }

            let api_client = api_client.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_restaurant(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => {
                        gloo::console::error!("Failed to delete restaurant:", e);
                    }
                }
            });
        })
    };

    let set_query = {
        let store = store.clone();
        Callback::from(move |query: String| {
            store.dispatch(ListAction::QueryChanged(query));
        })
    };

    let change_page = {
        let store = store.clone();
        Callback::from(move |page: usize| {
            store.dispatch(ListAction::PageChanged(page));
        })
    };

    // Copy the selected record into the form and remember its id
    let start_edit = {
        let store = store.clone();
        let form = form.clone();
        let form_errors = form_errors.clone();

        Callback::from(move |id: i64| {
            match store.state.find(id) {
                Some(restaurant) => {
                    form.set(RestaurantFormState::load(restaurant));
                    form_errors.set(Vec::new());
                    store.dispatch(ListAction::EditStarted(id));
                }
                None => {
                    gloo::console::warn!("No loaded restaurant with id", id as f64);
                }
            }
        })
    };

    // Clear both the selection and the form
    let cancel_edit = {
        let store = store.clone();
        let form = form.clone();
        let form_errors = form_errors.clone();

        Callback::from(move |_| {
            store.dispatch(ListAction::EditCancelled);
            form.set(RestaurantFormState::default());
            form_errors.set(Vec::new());
        })
    };

    let update_form = {
        let form = form.clone();
        Callback::from(move |next: RestaurantFormState| {
            form.set(next);
        })
    };

    let state = RestaurantsState {
        list: store.state.clone(),
        form: (*form).clone(),
        form_errors: (*form_errors).clone(),
        loading: *loading,
        saving: *saving,
    };

    let actions = UseRestaurantsActions {
        refresh,
        submit,
        delete,
        set_query,
        change_page,
        start_edit,
        cancel_edit,
        update_form,
    };

    UseRestaurantsResult { state, actions }
}
