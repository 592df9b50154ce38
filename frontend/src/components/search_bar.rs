use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_query_change: Callback<String>,
}

/// Free-text filter input; every keystroke updates the query.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_query_change.emit(input.value());
        })
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search by name or location..."
                value={props.query.clone()}
                {oninput}
            />
        </div>
    }
}
