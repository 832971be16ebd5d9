use leptos::*;
use leptos_router::*;

use activitydb_app::Page;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <section>
        <div class="container p-6 mx-auto text-center">
          <h2 class="text-xl font-semibold mb-4">"Page not found"</h2>
          <A href = Page::Home.path()>"Back to the start page"</A>
        </div>
      </section>
    }
}
