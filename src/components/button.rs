use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Label; rendered as the button's only child, unchanged.
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button type="button" style="padding:8px 12px;border-radius:6px">
            { props.children.clone() }
        </button>
    }
}
