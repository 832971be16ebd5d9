use leptos::*;
use leptos_router::*;

use activitydb_app::Page;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section>
        <div class="container p-6 mx-auto text-center">
          <h2 class="text-3xl font-bold mb-6">"Welcome"</h2>
          <p class="mb-6 text-gray-600">"Browse the upcoming activities and keep them up to date."</p>
          <A href = Page::Activities.path() class="px-6 py-2.5 rounded shadow-md bg-gray-100 hover:bg-gray-200">
            "Show activities"
          </A>
        </div>
      </section>
    }
}
