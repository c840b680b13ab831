use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container" id="not-found-container">
            <h1>{"Page not found"}</h1>
            <p>{"The page you requested does not exist."}</p>
        </div>
    }
}
