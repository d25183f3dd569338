//! Home page placeholder for the signed-in area.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h2>"Home"</h2>
            <p>"Your dashboard will appear here."</p>
        </div>
    }
}
