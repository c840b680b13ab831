use yew::prelude::*;
use crate::components::{DocumentHead, RootLayout};
use crate::metadata::{Metadata, METADATA};
use crate::pages::{self, Page};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or(Page::Home)]
    pub page: Page,
    #[prop_or(METADATA)]
    pub metadata: Metadata,
    /// Stylesheet hrefs for the document head.
    #[prop_or_default]
    pub stylesheets: Vec<String>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let head = html! {
        <DocumentHead metadata={props.metadata.clone()} stylesheets={props.stylesheets.clone()} />
    };

    html! {
        <RootLayout {head}>
            {
                match props.page {
                    Page::Home     => html! { <pages::HomePage /> },
                    Page::NotFound => html! { <pages::NotFoundPage /> },
                }
            }
        </RootLayout>
    }
}
