use leptos::*;

use activitydb_app::{category_image_path, Activity, Msg, Remote};

use crate::Ctx;

#[component]
pub fn ActivityList(ctx: Ctx) -> impl IntoView {
    // -- memos -- //

    let activities = create_memo(move |_| ctx.mdl.with(|mdl| mdl.activities.clone()));

    view! {
      <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
        <div class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
          <h3 class="text-base font-semibold leading-6 text-gray-900">"Activities"</h3>
          <button
            class="text-sm text-gray-500 hover:text-gray-900"
            prop:disabled = move || activities.with(Remote::is_loading)
            on:click = move |_| ctx.dispatch(Msg::ReloadActivities)
          >
            "Reload"
          </button>
        </div>
        { move || match activities.get() {
            Remote::Unloaded | Remote::Loading => view! {
              <p class="px-4 py-5 text-gray-500">"Loading activities ..."</p>
            }.into_view(),
            Remote::NotFound => view! {
              <p class="px-4 py-5 text-gray-500">"There are no activities"</p>
            }.into_view(),
            Remote::Errored(reason) => view! {
              <p class="px-4 py-5 text-red-700">{ format!("Unable to load activities: {reason}") }</p>
            }.into_view(),
            Remote::Loaded(activities) => {
              if activities.is_empty() {
                return view! {
                  <p class="px-4 py-5 text-gray-500">"There are no activities"</p>
                }.into_view();
              }
              view! {
                <ul role="list" class="divide-y divide-gray-100">
                  <For
                    each = move || activities.clone()
                    key = |activity| activity.id.clone()
                    let:activity
                  >
                    <ActivityListItem ctx activity />
                  </For>
                </ul>
              }.into_view()
            }
          }
        }
      </div>
    }
}

#[component]
fn ActivityListItem(ctx: Ctx, activity: Activity) -> impl IntoView {
    let Activity {
        id,
        title,
        date,
        category,
        ..
    } = activity;

    let selected = {
        let id = id.clone();
        create_memo(move |_| ctx.mdl.with(|mdl| mdl.selection.is_selected(&id)))
    };

    let image = category_image_path(&category);

    view! {
      <li
        class = move || if selected.get() {
            "flex items-center gap-x-4 px-4 py-4 bg-gray-100"
        } else {
            "flex items-center gap-x-4 px-4 py-4 hover:bg-gray-50"
        }
      >
        <img class="h-12 w-12 flex-none rounded object-cover" src=image alt=category.clone() />
        <div class="min-w-0 flex-auto">
          <p class="text-sm font-semibold leading-6 text-gray-900">{ title }</p>
          <p class="mt-1 flex text-xs leading-5 text-gray-500">
            <span>{ date }</span>
            <span class="ml-3">{ category }</span>
          </p>
        </div>
        <button
          class="text-sm text-gray-500 hover:text-gray-900"
          on:click = move |_| ctx.dispatch(Msg::Select(id.clone()))
        >
          "View"
        </button>
      </li>
    }
}
