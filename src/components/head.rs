use yew::prelude::*;
use crate::metadata::Metadata;

#[derive(Properties, PartialEq)]
pub struct DocumentHeadProps {
    pub metadata: Metadata,
    /// Stylesheet hrefs, linked in order.
    #[prop_or_default]
    pub stylesheets: Vec<String>,
}

#[function_component(DocumentHead)]
pub fn document_head(props: &DocumentHeadProps) -> Html {
    html! {
        <head>
            <meta charset="utf-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{ props.metadata.title.to_string() }</title>
            <meta name="description" content={props.metadata.description.to_string()} />
            { for props.stylesheets.iter().map(|href| html! {
                <link rel="stylesheet" href={href.clone()} />
            }) }
        </head>
    }
}
