use shared::{FormField, RestaurantFormState, RestaurantValidationError};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RestaurantFieldsProps {
    pub form: RestaurantFormState,
    pub errors: Vec<RestaurantValidationError>,
    pub disabled: bool,
    /// Emits the whole updated form state on every field change
    pub on_change: Callback<RestaurantFormState>,
}

/// The shared field block of the restaurant forms: one labelled input per
/// required field, with its validation message rendered inline.
#[function_component(RestaurantFields)]
pub fn restaurant_fields(props: &RestaurantFieldsProps) -> Html {
    let input_change = |apply: fn(&mut RestaurantFormState, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let on_image_url_change = input_change(|form, value| form.image_url = value);
    let on_name_change = input_change(|form, value| form.name = value);
    let on_location_change = input_change(|form, value| form.location = value);
    let on_contact_number_change = input_change(|form, value| form.contact_number = value);
    let on_email_change = input_change(|form, value| form.email = value);

    // Description is a textarea, so the target type differs
    let on_description_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.description = input.value();
            on_change.emit(next);
        })
    };

    let error_for = |field: FormField| -> Html {
        match props.errors.iter().find(|e| e.field() == field) {
            Some(error) => html! {
                <div class="form-message error">{error.message()}</div>
            },
            None => html! {},
        }
    };

    html! {
        <>
            <div class="form-group">
                <label for="image-url">{"Image URL"}</label>
                <input
                    type="url"
                    id="image-url"
                    placeholder="https://example.com/photo.jpg"
                    value={props.form.image_url.clone()}
                    onchange={on_image_url_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::ImageUrl)}
            </div>

            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Restaurant name"
                    value={props.form.name.clone()}
                    onchange={on_name_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::Name)}
            </div>

            <div class="form-group">
                <label for="description">{"Description"}</label>
                <textarea
                    id="description"
                    placeholder="What makes this place worth a visit?"
                    value={props.form.description.clone()}
                    onchange={on_description_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::Description)}
            </div>

            <div class="form-group">
                <label for="location">{"Location"}</label>
                <input
                    type="text"
                    id="location"
                    placeholder="City or neighbourhood"
                    value={props.form.location.clone()}
                    onchange={on_location_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::Location)}
            </div>

            <div class="form-group">
                <label for="contact-number">{"Contact Number"}</label>
                <input
                    type="tel"
                    id="contact-number"
                    placeholder="10-digit phone number"
                    value={props.form.contact_number.clone()}
                    onchange={on_contact_number_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::ContactNumber)}
            </div>

            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    placeholder="bookings@restaurant.com"
                    value={props.form.email.clone()}
                    onchange={on_email_change}
                    disabled={props.disabled}
                />
                {error_for(FormField::Email)}
            </div>
        </>
    }
}
