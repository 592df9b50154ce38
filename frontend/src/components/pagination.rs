use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_change_page: Callback<usize>,
}

/// Previous/next and numbered page buttons. Out-of-range requests are
/// already no-ops in the list state; the buttons are disabled as well so
/// the edges are visible.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_change_page = props.on_change_page.clone();
        Callback::from(move |_: MouseEvent| on_change_page.emit(page))
    };

    html! {
        <nav class="pagination">
            <button
                class="pagination-btn"
                onclick={go_to(props.current_page.saturating_sub(1))}
                disabled={props.current_page <= 1}
            >
                {"Previous"}
            </button>

            {for (1..=props.total_pages).map(|page| {
                let class = if page == props.current_page {
                    "pagination-btn active"
                } else {
                    "pagination-btn"
                };
                html! {
                    <button class={class} onclick={go_to(page)}>
                        {page}
                    </button>
                }
            })}

            <button
                class="pagination-btn"
                onclick={go_to(props.current_page + 1)}
                disabled={props.current_page >= props.total_pages}
            >
                {"Next"}
            </button>
        </nav>
    }
}
