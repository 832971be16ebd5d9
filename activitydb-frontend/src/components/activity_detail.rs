use leptos::{ev, *};

use activitydb_app::{
    category_image_path, Activity, ActivityForm, DateInput, DetailState, FormField, Mdl, Msg,
    Remote,
};

use crate::Ctx;

/// The part of the model that decides which view is rendered.
///
/// Form edits must not re-create the form, otherwise the inputs
/// would lose their focus on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DetailView {
    Idle,
    Viewing(Remote<Activity>),
    Editing(Remote<Activity>),
    Form,
}

impl From<DetailState<'_>> for DetailView {
    fn from(from: DetailState<'_>) -> Self {
        match from {
            DetailState::Idle => Self::Idle,
            DetailState::Viewing(activity) => Self::Viewing(activity.clone()),
            DetailState::Editing { form: Some(_), .. } => Self::Form,
            DetailState::Editing { activity, .. } => Self::Editing(activity.clone()),
        }
    }
}

#[component]
pub fn ActivityDetail(ctx: Ctx) -> impl IntoView {
    let detail = create_memo(move |_| ctx.mdl.with(|mdl| DetailView::from(mdl.detail())));

    view! {
      <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
        { move || match detail.get() {
            DetailView::Idle => view! {
              <p class="px-4 py-5 text-gray-500">"Select an activity to see the details"</p>
            }.into_view(),
            DetailView::Viewing(Remote::Loaded(activity)) => view! {
              <ActivityCard ctx activity />
            }.into_view(),
            DetailView::Viewing(remote) | DetailView::Editing(remote) => view! {
              <RemoteStatus ctx remote />
            }.into_view(),
            DetailView::Form => view! {
              <EditForm ctx />
            }.into_view(),
          }
        }
      </div>
    }
}

#[component]
fn RemoteStatus(ctx: Ctx, remote: Remote<Activity>) -> impl IntoView {
    let message = match remote {
        Remote::Unloaded | Remote::Loading | Remote::Loaded(_) => {
            return view! { <p class="px-4 py-5 text-gray-500">"Loading activity ..."</p> }
                .into_view();
        }
        Remote::NotFound => "Activity not found".to_owned(),
        Remote::Errored(reason) => format!("Unable to load activity: {reason}"),
    };
    view! {
      <div class="px-4 py-5">
        <p class="mb-4 text-red-700">{ message }</p>
        <button
          class="text-sm text-gray-500 hover:text-gray-900"
          on:click = move |_| ctx.dispatch(Msg::ClearSelection)
        >
          "Back to the list"
        </button>
      </div>
    }
    .into_view()
}

#[component]
fn ActivityCard(ctx: Ctx, activity: Activity) -> impl IntoView {
    let Activity {
        title,
        date,
        description,
        category,
        ..
    } = activity;
    let image = category_image_path(&category);

    view! {
      <article>
        <img class="w-full h-48 object-cover" src=image alt=category.clone() />
        <div class="px-4 py-5 sm:px-6">
          <h3 class="text-xl font-semibold text-gray-900">{ title }</h3>
          <p class="mt-1 text-sm text-gray-500">
            <span>{ date }</span>
            <span class="ml-3">{ category }</span>
          </p>
          <p class="mt-4 text-gray-700 whitespace-pre-line">{ description }</p>
          <div class="mt-6 flex space-x-4">
            <button
              class="px-4 py-2 text-sm rounded shadow-md bg-gray-100 hover:bg-gray-200"
              on:click = move |_| ctx.dispatch(Msg::OpenForm)
            >
              "Edit"
            </button>
            <button
              class="px-4 py-2 text-sm text-gray-500 hover:text-gray-900"
              on:click = move |_| ctx.dispatch(Msg::ClearSelection)
            >
              "Close"
            </button>
          </div>
        </div>
      </article>
    }
}

fn field_value(mdl: &Mdl, field: FormField) -> String {
    let Some(form) = &mdl.form else {
        return String::new();
    };
    let fields = &form.fields;
    match field {
        FormField::Title => fields.title.clone(),
        FormField::Date => fields.date.clone(),
        FormField::Description => fields.description.clone(),
        FormField::Category => fields.category.clone(),
    }
}

const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-gray-500 focus:outline-none";

#[component]
fn EditForm(ctx: Ctx) -> impl IntoView {
    // -- signals -- //

    let submitting = Signal::derive(move || {
        ctx.mdl
            .with(|mdl| mdl.form.as_ref().is_some_and(|form| form.submitting))
    });
    let error = Signal::derive(move || {
        ctx.mdl
            .with(|mdl| mdl.form.as_ref().and_then(|form| form.error.clone()))
    });
    // Chosen once, so that the stored date is shown as it is
    let date_input = ctx.mdl.with_untracked(|mdl| {
        mdl.form
            .as_ref()
            .map(ActivityForm::date_input)
            .unwrap_or_default()
    });

    // -- callbacks -- //

    let value =
        move |field: FormField| Signal::derive(move || ctx.mdl.with(|mdl| field_value(mdl, field)));
    let on_input = move |field: FormField| {
        move |ev: ev::Event| ctx.dispatch(Msg::FormChanged(field, event_target_value(&ev)))
    };

    view! {
      <form
        class="px-4 py-5 sm:px-6"
        on:submit = move |ev| {
          ev.prevent_default();
          ctx.dispatch(Msg::Submit);
        }
      >
        <h3 class="mb-4 text-base font-semibold leading-6 text-gray-900">"Edit activity"</h3>
        { move || error.get().map(|err| view! {
          <p class="mb-4 text-red-700">{ err }</p>
        })}
        <div class="mb-4">
          <label class="block text-sm text-gray-500">"Title"</label>
          <input
            type = "text"
            required
            class = INPUT_CLASS
            prop:disabled = move || submitting.get()
            prop:value = value(FormField::Title)
            on:input = on_input(FormField::Title)
          />
        </div>
        <div class="mb-4">
          <label class="block text-sm text-gray-500">"Date"</label>
          <input
            type = date_input.html_type()
            step = (date_input == DateInput::Local).then_some("1")
            placeholder = (date_input == DateInput::Text).then_some("YYYY-MM-DDTHH:MM:SS+HH:MM")
            required
            class = INPUT_CLASS
            prop:disabled = move || submitting.get()
            prop:value = value(FormField::Date)
            on:input = on_input(FormField::Date)
          />
        </div>
        <div class="mb-4">
          <label class="block text-sm text-gray-500">"Category"</label>
          <input
            type = "text"
            required
            class = INPUT_CLASS
            prop:disabled = move || submitting.get()
            prop:value = value(FormField::Category)
            on:input = on_input(FormField::Category)
          />
        </div>
        <div class="mb-4">
          <label class="block text-sm text-gray-500">"Description"</label>
          <textarea
            rows = "5"
            class = INPUT_CLASS
            prop:disabled = move || submitting.get()
            prop:value = value(FormField::Description)
            on:input = on_input(FormField::Description)
          />
        </div>
        <div class="flex space-x-4">
          <button
            type = "submit"
            class="px-4 py-2 text-sm rounded shadow-md bg-gray-100 hover:bg-gray-200"
            prop:disabled = move || submitting.get()
          >
            { move || if submitting.get() { "Saving ..." } else { "Save" } }
          </button>
          <button
            type = "button"
            class="px-4 py-2 text-sm text-gray-500 hover:text-gray-900"
            prop:disabled = move || submitting.get()
            on:click = move |_| ctx.dispatch(Msg::CloseForm)
          >
            "Cancel"
          </button>
        </div>
      </form>
    }
}
