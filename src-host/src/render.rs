use microservices_frontend_ui::{App, AppProps, Page, METADATA};
use yew::ServerRenderer;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Renders `page` into a complete HTML document.
pub async fn render_page(page: Page, stylesheets: Vec<String>) -> String {
    let markup = ServerRenderer::<App>::with_props(move || AppProps {
        page,
        metadata: METADATA,
        stylesheets,
    })
    .hydratable(false)
    .render()
    .await;

    format!("{DOCTYPE}{markup}")
}
