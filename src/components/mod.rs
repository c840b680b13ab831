pub mod button;
pub mod head;
pub mod layout;

pub use button::Button;
pub use head::DocumentHead;
pub use layout::RootLayout;

#[cfg(test)]
pub(crate) mod test_util {
    use yew::html::BaseComponent;
    use yew::ServerRenderer;

    /// Renders a component to a string without hydration markers.
    pub async fn render<C, F>(props: F) -> String
    where
        C: BaseComponent,
        F: 'static + Send + FnOnce() -> C::Properties,
    {
        ServerRenderer::<C>::with_props(props).hydratable(false).render().await
    }
}
