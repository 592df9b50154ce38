use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{RestaurantFormPage, RestaurantListPage};

/// Application routes; anything unrecognized falls back to the list.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/restaurants")]
    Restaurants,
    #[at("/restaurants/new")]
    NewRestaurant,
    #[at("/restaurants/edit/:id")]
    EditRestaurant { id: i64 },
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Restaurants => html! { <RestaurantListPage /> },
        Route::NewRestaurant => html! { <RestaurantFormPage /> },
        Route::EditRestaurant { id } => html! { <RestaurantFormPage id={Some(id)} /> },
        Route::Home | Route::NotFound => {
            html! { <Redirect<Route> to={Route::Restaurants} /> }
        }
    }
}
