use leptos::*;

use crate::{components::*, Ctx};

/// List and detail view of the activities.
///
/// The selection is derived from the current route.
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = expect_context::<Ctx>();

    view! {
      <section class="container mx-auto">
        <div class="mx-auto max-w-7xl py-6 sm:px-6 lg:px-8">
          <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
            <ActivityList ctx />
            <ActivityDetail ctx />
          </div>
        </div>
      </section>
    }
}
