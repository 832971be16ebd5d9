use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use activitydb_app::{run, update, Cmd, Mdl, Msg, Page};
use activitydb_frontend_api::PublicApi;

mod components;
mod pages;

use components::*;
use pages::*;

const DEFAULT_API_URL: &str = "/api";

/// Connects the presentation model with the API and the router.
#[derive(Clone, Copy)]
pub struct Ctx {
    pub mdl: RwSignal<Mdl>,
    api: StoredValue<PublicApi>,
    navigate: StoredValue<Rc<dyn Fn(&str)>>,
}

impl Ctx {
    fn new(api: PublicApi, navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            mdl: RwSignal::new(Mdl::default()),
            api: StoredValue::new(api),
            navigate: StoredValue::new(Rc::new(navigate) as Rc<dyn Fn(&str)>),
        }
    }

    pub fn dispatch(self, msg: Msg) {
        let cmds = match self.mdl.try_update(|mdl| update(msg, mdl)) {
            Some(Ok(cmds)) => cmds,
            Some(Err(err)) => {
                log::warn!("{err}");
                return;
            }
            None => {
                log::warn!("The model has already been disposed");
                return;
            }
        };
        for cmd in cmds {
            if let Cmd::Navigate(page) = cmd {
                self.navigate.with_value(|navigate| navigate(&page.path()));
                continue;
            }
            let api = self.api.get_value();
            spawn_local(async move {
                if let Some(msg) = run(cmd, &api).await {
                    self.dispatch(msg);
                }
            });
        }
    }
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    view! {
      <Router>
        <Shell />
      </Router>
    }
}

/// Everything that needs access to the router.
#[component]
fn Shell() -> impl IntoView {
    let navigate = use_navigate();
    let ctx = Ctx::new(PublicApi::new(DEFAULT_API_URL.to_owned()), move |path| {
        navigate(path, NavigateOptions::default());
    });
    provide_context(ctx);

    // -- effects -- //

    let location = use_location();
    create_effect(move |_| {
        location.pathname.track();
        // Ids are decoded by `Page::init`, so the path must still be escaped
        let path = window()
            .location()
            .pathname()
            .unwrap_or_else(|_| location.pathname.get_untracked());
        log::debug!("Route changed: {path}");
        ctx.dispatch(Msg::UrlChanged(Page::init(&path)));
    });

    view! {
      <NavBar />
      <main>
        <Routes>
          <Route path=Page::Home.path() view=Home />
          <Route path=Page::Activities.path() view=Dashboard />
          <Route path=format!("{}/:id", Page::ACTIVITIES_PATH) view=Dashboard />
          <Route path=format!("{}/:id", Page::MANAGE_PATH) view=Dashboard />
          <Route path="/*any" view=NotFound />
        </Routes>
      </main>
    }
}
