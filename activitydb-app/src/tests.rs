use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

fn hike() -> Activity {
    Activity {
        id: "1".into(),
        title: "Hike".into(),
        date: "2024-05-01".into(),
        description: "Trail walk".into(),
        category: "hiking".into(),
    }
}

fn concert() -> Activity {
    Activity {
        id: "2".into(),
        title: "Concert".into(),
        date: "2024-06-01T20:00:00".into(),
        description: String::new(),
        category: "music".into(),
    }
}

fn navigate(mdl: &mut Mdl, path: &str) -> Vec<Cmd> {
    update(Msg::UrlChanged(Page::init(path)), mdl).unwrap()
}

/// Follow all navigation commands like the router would do.
fn dispatch(mdl: &mut Mdl, msg: Msg) -> Vec<Cmd> {
    let mut pending = update(msg, mdl).unwrap();
    let mut cmds = vec![];
    while let Some(cmd) = pending.pop() {
        match cmd {
            Cmd::Navigate(page) => pending.extend(update(Msg::UrlChanged(page), mdl).unwrap()),
            cmd => cmds.push(cmd),
        }
    }
    cmds
}

/// Answer the latest activity request.
fn fetched(mdl: &mut Mdl, id: &str, result: Result<Option<Activity>, String>) {
    let msg = Msg::ActivityFetched {
        id: id.to_owned(),
        request: mdl.activity_request,
        result,
    };
    update(msg, mdl).unwrap();
}

fn viewing_hike() -> Mdl {
    let mut mdl = Mdl::default();
    navigate(&mut mdl, "/activities/1");
    fetched(&mut mdl, "1", Ok(Some(hike())));
    mdl
}

mod list {
    use super::*;

    #[test]
    fn load_once_on_dashboard() {
        let mut mdl = Mdl::default();
        assert!(navigate(&mut mdl, "/").is_empty());
        assert_eq!(mdl.activities, Remote::Unloaded);
        assert_eq!(navigate(&mut mdl, "/activities"), vec![Cmd::FetchActivities]);
        assert!(mdl.activities.is_loading());
        assert_eq!(
            navigate(&mut mdl, "/activities/1"),
            vec![Cmd::FetchActivity {
                id: "1".into(),
                request: 1,
            }]
        );
    }

    #[test]
    fn render_empty_list() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        update(Msg::ActivitiesFetched(Ok(vec![])), &mut mdl).unwrap();
        assert_eq!(mdl.activities, Remote::Loaded(vec![]));
    }

    #[test]
    fn failed_to_load() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        update(Msg::ActivitiesFetched(Err("offline".into())), &mut mdl).unwrap();
        assert_eq!(mdl.activities, Remote::Errored("offline".into()));
    }

    #[test]
    fn discard_list_if_not_loading() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        update(Msg::ActivitiesFetched(Ok(vec![hike()])), &mut mdl).unwrap();
        update(Msg::ActivitiesFetched(Ok(vec![])), &mut mdl).unwrap();
        assert_eq!(mdl.activities, Remote::Loaded(vec![hike()]));
    }

    #[test]
    fn select_activity() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        let cmds = update(Msg::Select("1".into()), &mut mdl).unwrap();
        assert_eq!(cmds, vec![Cmd::Navigate(Page::Activity("1".into()))]);
    }
}

mod detail {
    use super::*;

    #[test]
    fn idle_without_selection() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        assert_eq!(mdl.detail(), DetailState::Idle);
    }

    #[test]
    fn view_selected_activity() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities/1");
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::Loading));
        fetched(&mut mdl, "1", Ok(Some(hike())));
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::Loaded(hike())));
    }

    #[test]
    fn not_found() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities/2");
        fetched(&mut mdl, "2", Ok(None));
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::NotFound));
    }

    #[test]
    fn discard_stale_activity() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities/1");
        navigate(&mut mdl, "/activities/2");
        fetched(&mut mdl, "1", Ok(Some(hike())));
        assert_eq!(mdl.activity, Remote::Loading);
        fetched(&mut mdl, "2", Ok(Some(concert())));
        assert_eq!(mdl.activity, Remote::Loaded(concert()));
    }

    #[test]
    fn apply_only_the_latest_request() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        let first = navigate(&mut mdl, "/activities/1");
        navigate(&mut mdl, "/activities/2");
        let latest = navigate(&mut mdl, "/activities/1");
        assert_eq!(
            first,
            vec![Cmd::FetchActivity {
                id: "1".into(),
                request: 1,
            }]
        );
        assert_eq!(
            latest,
            vec![Cmd::FetchActivity {
                id: "1".into(),
                request: 3,
            }]
        );
        let outdated = Activity {
            title: "Outdated hike".into(),
            ..hike()
        };
        update(
            Msg::ActivityFetched {
                id: "1".into(),
                request: 1,
                result: Ok(Some(outdated)),
            },
            &mut mdl,
        )
        .unwrap();
        assert_eq!(mdl.activity, Remote::Loading);
        update(
            Msg::ActivityFetched {
                id: "1".into(),
                request: 3,
                result: Ok(Some(hike())),
            },
            &mut mdl,
        )
        .unwrap();
        assert_eq!(mdl.activity, Remote::Loaded(hike()));
    }

    #[test]
    fn discard_response_after_clearing_the_selection() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities/1");
        let request = mdl.activity_request;
        navigate(&mut mdl, "/activities");
        navigate(&mut mdl, "/activities/1");
        update(
            Msg::ActivityFetched {
                id: "1".into(),
                request,
                result: Ok(None),
            },
            &mut mdl,
        )
        .unwrap();
        assert_eq!(mdl.activity, Remote::Loading);
    }

    #[test]
    fn select_view_then_cancel() {
        let mut mdl = viewing_hike();
        dispatch(&mut mdl, Msg::ClearSelection);
        assert_eq!(mdl.page, Page::Activities);
        assert_eq!(mdl.selection.selected_id(), None);
        assert_eq!(mdl.detail(), DetailState::Idle);
    }

    #[test]
    fn open_and_close_form() {
        let mut mdl = viewing_hike();
        assert!(dispatch(&mut mdl, Msg::OpenForm).is_empty());
        let DetailState::Editing { form, .. } = mdl.detail() else {
            panic!("not editing");
        };
        assert_eq!(form.unwrap().fields.title, "Hike");
        dispatch(&mut mdl, Msg::CloseForm);
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::Loaded(hike())));
        assert!(mdl.form.is_none());
    }

    #[test]
    fn reject_editing_without_selection() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        let err = update(Msg::OpenForm, &mut mdl).unwrap_err();
        assert_eq!(err.from, Mode::Idle);
        assert_eq!(mdl.page, Page::Activities);
        assert!(update(Msg::Submit, &mut mdl).is_err());
    }

    #[test]
    fn open_form_by_link() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/activities");
        assert_eq!(mdl.selection.mode(), Mode::Idle);
        let cmds = update(Msg::UrlChanged(Page::Manage("1".into())), &mut mdl).unwrap();
        assert_eq!(
            cmds,
            vec![Cmd::FetchActivity {
                id: "1".into(),
                request: 1,
            }]
        );
        assert_eq!(mdl.selection.mode(), Mode::Editing);
        fetched(&mut mdl, "1", Ok(Some(hike())));
        let DetailState::Editing { form, .. } = mdl.detail() else {
            panic!("not editing");
        };
        assert_eq!(form, Some(&ActivityForm::new(&hike())));

        // Only the action is rejected
        navigate(&mut mdl, "/activities");
        assert!(update(Msg::OpenForm, &mut mdl).is_err());
        assert_eq!(mdl.page, Page::Activities);
    }

    #[test]
    fn seed_form_after_loading() {
        let mut mdl = Mdl::default();
        navigate(&mut mdl, "/manage/1");
        assert!(mdl.form.is_none());
        fetched(&mut mdl, "1", Ok(Some(hike())));
        assert_eq!(mdl.form, Some(ActivityForm::new(&hike())));
    }
}

mod form {
    use super::*;

    fn editing_hike() -> Mdl {
        let mut mdl = viewing_hike();
        dispatch(&mut mdl, Msg::OpenForm);
        mdl
    }

    #[test]
    fn submit_changes() {
        let mut mdl = editing_hike();
        update(
            Msg::FormChanged(FormField::Title, "Night hike".into()),
            &mut mdl,
        )
        .unwrap();
        let cmds = update(Msg::Submit, &mut mdl).unwrap();
        let update_activity = UpdateActivity {
            title: "Night hike".into(),
            date: "2024-05-01".into(),
            description: "Trail walk".into(),
            category: "hiking".into(),
        };
        assert_eq!(
            cmds,
            vec![Cmd::SubmitForm {
                id: "1".into(),
                update: update_activity,
            }]
        );
        assert!(mdl.form.as_ref().unwrap().submitting);
        // Submitting twice has no effect
        assert!(update(Msg::Submit, &mut mdl).unwrap().is_empty());

        let saved = Activity {
            title: "Night hike".into(),
            ..hike()
        };
        let cmds = dispatch(
            &mut mdl,
            Msg::Submitted {
                id: "1".into(),
                result: Ok(Some(saved.clone())),
            },
        );
        assert_eq!(cmds, vec![Cmd::FetchActivities]);
        assert_eq!(mdl.page, Page::Activity("1".into()));
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::Loaded(saved)));
    }

    #[test]
    fn keep_saved_activity_on_late_response() {
        let mut mdl = editing_hike();
        let pending = mdl.activity_request;
        update(
            Msg::FormChanged(FormField::Title, "Night hike".into()),
            &mut mdl,
        )
        .unwrap();
        update(Msg::Submit, &mut mdl).unwrap();
        let saved = Activity {
            title: "Night hike".into(),
            ..hike()
        };
        dispatch(
            &mut mdl,
            Msg::Submitted {
                id: "1".into(),
                result: Ok(Some(saved.clone())),
            },
        );
        update(
            Msg::ActivityFetched {
                id: "1".into(),
                request: pending,
                result: Ok(Some(hike())),
            },
            &mut mdl,
        )
        .unwrap();
        assert_eq!(mdl.activity, Remote::Loaded(saved));
    }

    #[test]
    fn keep_form_open_on_failure() {
        let mut mdl = editing_hike();
        update(Msg::Submit, &mut mdl).unwrap();
        update(
            Msg::Submitted {
                id: "1".into(),
                result: Err("The title is invalid".into()),
            },
            &mut mdl,
        )
        .unwrap();
        assert_eq!(mdl.page, Page::Manage("1".into()));
        let form = mdl.form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("The title is invalid"));
    }

    #[test]
    fn discard_result_after_leaving_form() {
        let mut mdl = editing_hike();
        update(Msg::Submit, &mut mdl).unwrap();
        dispatch(&mut mdl, Msg::ClearSelection);
        let cmds = update(
            Msg::Submitted {
                id: "1".into(),
                result: Ok(Some(hike())),
            },
            &mut mdl,
        )
        .unwrap();
        assert!(cmds.is_empty());
        assert_eq!(mdl.page, Page::Activities);
        assert_eq!(mdl.activity, Remote::Unloaded);
    }
}

mod commands {
    use super::*;

    #[derive(Default)]
    struct Dummy {
        activities: Vec<Activity>,
        submitted: RefCell<Vec<(String, UpdateActivity)>>,
        offline: bool,
    }

    impl QueryService for Dummy {
        type Error = &'static str;

        async fn list_activities(&self) -> Result<Vec<Activity>, Self::Error> {
            if self.offline {
                return Err("offline");
            }
            Ok(self.activities.clone())
        }

        async fn get_activity(&self, id: &str) -> Result<Option<Activity>, Self::Error> {
            if self.offline {
                return Err("offline");
            }
            Ok(self.activities.iter().find(|a| a.id == id).cloned())
        }
    }

    impl FormSubmission for Dummy {
        type Error = &'static str;

        async fn submit(
            &self,
            id: &str,
            update: &UpdateActivity,
        ) -> Result<Option<Activity>, Self::Error> {
            self.submitted
                .borrow_mut()
                .push((id.to_owned(), update.clone()));
            Ok(self.activities.iter().find(|a| a.id == id).cloned())
        }
    }

    #[test]
    fn fetch_activities() {
        let service = Dummy {
            activities: vec![hike(), concert()],
            ..Default::default()
        };
        let msg = block_on(run(Cmd::FetchActivities, &service));
        assert_eq!(msg, Some(Msg::ActivitiesFetched(Ok(vec![hike(), concert()]))));
    }

    #[test]
    fn fetch_missing_activity() {
        let service = Dummy::default();
        let cmd = Cmd::FetchActivity {
            id: "1".into(),
            request: 7,
        };
        let msg = block_on(run(cmd, &service));
        assert_eq!(
            msg,
            Some(Msg::ActivityFetched {
                id: "1".into(),
                request: 7,
                result: Ok(None)
            })
        );
    }

    #[test]
    fn report_failures_as_text() {
        let service = Dummy {
            offline: true,
            ..Default::default()
        };
        let msg = block_on(run(Cmd::FetchActivities, &service));
        assert_eq!(msg, Some(Msg::ActivitiesFetched(Err("offline".into()))));
    }

    #[test]
    fn submit_form() {
        let service = Dummy {
            activities: vec![hike()],
            ..Default::default()
        };
        let update = ActivityForm::new(&hike()).fields;
        let msg = block_on(run(
            Cmd::SubmitForm {
                id: "1".into(),
                update: update.clone(),
            },
            &service,
        ));
        assert!(matches!(msg, Some(Msg::Submitted { result: Ok(Some(_)), .. })));
        assert_eq!(service.submitted.borrow()[0], ("1".to_owned(), update));
    }

    #[test]
    fn navigation_is_not_executed() {
        let service = Dummy::default();
        assert!(block_on(run(Cmd::Navigate(Page::Home), &service)).is_none());
    }

    #[test]
    fn load_dashboard() {
        let service = Dummy {
            activities: vec![hike()],
            ..Default::default()
        };
        let mut mdl = Mdl::default();
        let mut cmds = navigate(&mut mdl, "/activities/1");
        while let Some(cmd) = cmds.pop() {
            if let Some(msg) = block_on(run(cmd, &service)) {
                cmds.extend(update(msg, &mut mdl).unwrap());
            }
        }
        assert_eq!(mdl.activities, Remote::Loaded(vec![hike()]));
        assert_eq!(mdl.detail(), DetailState::Viewing(&Remote::Loaded(hike())));
    }
}

#[test]
fn image_of_category() {
    assert_eq!(
        category_image_path("music"),
        "/Images/categoryImages/music.jpg"
    );
}
