use shared::Restaurant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RestaurantTableProps {
    /// The page slice to display, already filtered and paginated
    pub restaurants: Vec<Restaurant>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(RestaurantTable)]
pub fn restaurant_table(props: &RestaurantTableProps) -> Html {
    if props.restaurants.is_empty() {
        return html! {
            <div class="empty-state">{"No restaurants found."}</div>
        };
    }

    html! {
        <div class="table-container">
            <table class="restaurants-table">
                <thead>
                    <tr>
                        <th>{"Image"}</th>
                        <th>{"Name"}</th>
                        <th>{"Description"}</th>
                        <th>{"Location"}</th>
                        <th>{"Contact"}</th>
                        <th>{"Email"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.restaurants.iter().map(|restaurant| {
                        let id = restaurant.id;
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(id))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };

                        html! {
                            <tr key={id}>
                                <td class="image">
                                    <img
                                        class="restaurant-thumbnail"
                                        src={restaurant.image_url.clone()}
                                        alt={restaurant.name.clone()}
                                    />
                                </td>
                                <td class="name">{&restaurant.name}</td>
                                <td class="description">{&restaurant.description}</td>
                                <td class="location">{&restaurant.location}</td>
                                <td class="contact">{&restaurant.contact_number}</td>
                                <td class="email">{&restaurant.email}</td>
                                <td class="actions">
                                    <button class="btn btn-secondary" onclick={on_edit}>
                                        {"Edit"}
                                    </button>
                                    <button class="btn btn-danger" onclick={on_delete}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
