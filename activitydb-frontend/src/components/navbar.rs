use leptos::*;
use leptos_router::*;

use activitydb_app::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Home.path()>"activitydb"</A>
          </div>

          // Menu items
          <div class="flex space-x-6">
            <A href = Page::Activities.path() class="hover:text-gray-500">"Activities"</A>
          </div>
        </div>
      </nav>
    }
}
