use yew::prelude::*;
use crate::components::Button;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="container" id="home-container">
            <h1>{"Microservices Frontend"}</h1>
            <p>{"Frontend scaffold for microservices-project."}</p>
            <Button>{"Get started"}</Button>
        </div>
    }
}
