use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    /// Page body, placed inside `<main>`.
    #[prop_or_default]
    pub children: Html,
    /// Rendered between `<html>` and `<body>`; empty unless the host fills it.
    #[prop_or_default]
    pub head: Html,
}

/// Outermost document structure shared by every page.
#[function_component(RootLayout)]
pub fn root_layout(props: &RootLayoutProps) -> Html {
    html! {
        <html lang="en">
            { props.head.clone() }
            <body>
                <main>{ props.children.clone() }</main>
            </body>
        </html>
    }
}
