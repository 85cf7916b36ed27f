use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
                {description.map(|d| view! { <p class="card-description">{d}</p> })}
            </div>
            <div class="card-content">{children()}</div>
        </div>
    }
}
