use crate::{
    Activity, ActivityForm, FormField, FormSubmission, InvalidTransition, Mode, Page,
    QueryService, Remote, Selection, Transition, UpdateActivity,
};

#[derive(Debug, Default)]
pub struct Mdl {
    pub page: Page,
    pub selection: Selection,
    pub activities: Remote<Vec<Activity>>,
    /// The selected activity
    pub activity: Remote<Activity>,
    /// Sequence number of the latest activity request
    pub activity_request: u64,
    pub form: Option<ActivityForm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    UrlChanged(Page),
    ReloadActivities,
    ActivitiesFetched(Result<Vec<Activity>, String>),
    ActivityFetched {
        id: String,
        request: u64,
        result: Result<Option<Activity>, String>,
    },
    Select(String),
    ClearSelection,
    OpenForm,
    CloseForm,
    FormChanged(FormField, String),
    Submit,
    Submitted {
        id: String,
        result: Result<Option<Activity>, String>,
    },
}

/// Side effects requested by [`update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    FetchActivities,
    FetchActivity { id: String, request: u64 },
    SubmitForm { id: String, update: UpdateActivity },
    Navigate(Page),
}

/// What the detail/form area renders
#[derive(Debug, PartialEq, Eq)]
pub enum DetailState<'a> {
    Idle,
    Viewing(&'a Remote<Activity>),
    Editing {
        activity: &'a Remote<Activity>,
        form: Option<&'a ActivityForm>,
    },
}

impl Mdl {
    #[must_use]
    pub fn detail(&self) -> DetailState<'_> {
        match self.selection.mode() {
            Mode::Idle => DetailState::Idle,
            Mode::Viewing => DetailState::Viewing(&self.activity),
            Mode::Editing => DetailState::Editing {
                activity: &self.activity,
                form: self.form.as_ref(),
            },
        }
    }

    fn seed_form(&mut self) {
        if self.selection.mode() != Mode::Editing {
            return;
        }
        if self.form.is_some() {
            return;
        }
        if let Remote::Loaded(activity) = &self.activity {
            self.form = Some(ActivityForm::new(activity));
        }
    }

    fn load_activity(&mut self, id: &str, cmds: &mut Vec<Cmd>) {
        self.activity = Remote::Loading;
        self.activity_request += 1;
        cmds.push(Cmd::FetchActivity {
            id: id.to_owned(),
            request: self.activity_request,
        });
    }

    /// Responses of pending activity requests will be discarded.
    fn forget_activity_requests(&mut self) {
        self.activity_request += 1;
    }

    fn load_activities(&mut self, cmds: &mut Vec<Cmd>) {
        self.activities = Remote::Loading;
        cmds.push(Cmd::FetchActivities);
    }
}

/// Apply a message to the model.
///
/// A rejected transition leaves the model unchanged.
pub fn update(msg: Msg, mdl: &mut Mdl) -> Result<Vec<Cmd>, InvalidTransition> {
    let mut cmds = vec![];
    match msg {
        // Route changes are not checked against the transitions,
        // a link to a form enters edit mode from any state.
        Msg::UrlChanged(page) => {
            let selection = Selection::from_page(&page);
            if page.is_dashboard() && mdl.activities == Remote::Unloaded {
                mdl.load_activities(&mut cmds);
            }
            if selection.selected_id() != mdl.selection.selected_id() {
                mdl.form = None;
                match selection.selected_id() {
                    Some(id) => {
                        mdl.load_activity(id, &mut cmds);
                    }
                    None => {
                        mdl.activity = Remote::Unloaded;
                        mdl.forget_activity_requests();
                    }
                }
            }
            if selection.mode() != Mode::Editing {
                mdl.form = None;
            }
            mdl.page = page;
            mdl.selection = selection;
            mdl.seed_form();
        }
        Msg::ReloadActivities => {
            mdl.load_activities(&mut cmds);
        }
        Msg::ActivitiesFetched(result) => {
            if !mdl.activities.is_loading() {
                log::debug!("Discard stale list of activities");
                return Ok(cmds);
            }
            mdl.activities = match result {
                Ok(activities) => Remote::Loaded(activities),
                Err(reason) => Remote::Errored(reason),
            };
        }
        Msg::ActivityFetched {
            id,
            request,
            result,
        } => {
            if request != mdl.activity_request || !mdl.selection.is_selected(&id) {
                log::debug!("Discard stale activity {id} (request {request})");
                return Ok(cmds);
            }
            mdl.activity = result.into();
            mdl.seed_form();
        }
        Msg::Select(id) => {
            cmds.push(Cmd::Navigate(mdl.selection.select(id)?));
        }
        Msg::ClearSelection => {
            cmds.push(Cmd::Navigate(mdl.selection.clear_selection()?));
        }
        Msg::OpenForm => {
            cmds.push(Cmd::Navigate(mdl.selection.open_form()?));
        }
        Msg::CloseForm => {
            cmds.push(Cmd::Navigate(mdl.selection.close_form()?));
        }
        Msg::FormChanged(field, value) => {
            if let Some(form) = &mut mdl.form {
                form.set(field, value);
            }
        }
        Msg::Submit => {
            let form = match &mut mdl.form {
                Some(form) if mdl.selection.mode() == Mode::Editing => form,
                _ => {
                    return Err(InvalidTransition {
                        from: mdl.selection.mode(),
                        transition: Transition::Submit,
                    });
                }
            };
            if form.submitting {
                log::debug!("Form of activity {} is already submitted", form.id);
                return Ok(cmds);
            }
            form.submitting = true;
            form.error = None;
            cmds.push(Cmd::SubmitForm {
                id: form.id.clone(),
                update: form.fields.clone(),
            });
        }
        Msg::Submitted { id, result } => {
            let Some(form) = mdl.form.as_mut().filter(|form| form.id == id) else {
                log::debug!("Discard stale submission result of activity {id}");
                return Ok(cmds);
            };
            form.submitting = false;
            match result {
                Ok(Some(activity)) => {
                    mdl.activity = Remote::Loaded(activity);
                    mdl.forget_activity_requests();
                    mdl.form = None;
                    mdl.load_activities(&mut cmds);
                    cmds.push(Cmd::Navigate(Page::Activity(id)));
                }
                Ok(None) => {
                    form.error = Some("Activity not found".to_owned());
                }
                Err(reason) => {
                    form.error = Some(reason);
                }
            }
        }
    }
    Ok(cmds)
}

/// Execute a command and return the resulting message.
///
/// Navigation is left to the router and results in `None`.
pub async fn run<S>(cmd: Cmd, service: &S) -> Option<Msg>
where
    S: QueryService + FormSubmission,
{
    let msg = match cmd {
        Cmd::FetchActivities => {
            let result = service
                .list_activities()
                .await
                .map_err(|err| err.to_string());
            Msg::ActivitiesFetched(result)
        }
        Cmd::FetchActivity { id, request } => {
            let result = service
                .get_activity(&id)
                .await
                .map_err(|err| err.to_string());
            Msg::ActivityFetched {
                id,
                request,
                result,
            }
        }
        Cmd::SubmitForm { id, update } => {
            let result = service
                .submit(&id, &update)
                .await
                .map_err(|err| err.to_string());
            Msg::Submitted { id, result }
        }
        Cmd::Navigate(_) => return None,
    };
    Some(msg)
}
