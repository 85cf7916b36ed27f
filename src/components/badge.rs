use leptos::prelude::*;

#[component]
pub fn Badge(
    /// The label text, e.g. "Leptos"
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! { <span class="badge">{label}</span> }
}
