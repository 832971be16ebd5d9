use std::fmt;

use thiserror::Error;

use crate::Page;

/// Mode of the detail/form area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Viewing,
    Editing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Viewing => "viewing",
            Self::Editing => "editing",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Select,
    ClearSelection,
    OpenForm,
    CloseForm,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {transition:?} while {from}")]
pub struct InvalidTransition {
    pub from: Mode,
    pub transition: Transition,
}

/// The selected activity and whether it is edited.
///
/// Derived from the current [`Page`], edit mode
/// only exists together with a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<String>,
    edit_mode: bool,
}

type Result<T> = std::result::Result<T, InvalidTransition>;

impl Selection {
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        match page {
            Page::Activity(id) => Self {
                id: Some(id.clone()),
                edit_mode: false,
            },
            Page::Manage(id) => Self {
                id: Some(id.clone()),
                edit_mode: true,
            },
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        match (&self.id, self.edit_mode) {
            (None, _) => Page::Activities,
            (Some(id), false) => Page::Activity(id.clone()),
            (Some(id), true) => Page::Manage(id.clone()),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub const fn mode(&self) -> Mode {
        match (&self.id, self.edit_mode) {
            (None, _) => Mode::Idle,
            (Some(_), false) => Mode::Viewing,
            (Some(_), true) => Mode::Editing,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    const fn invalid(&self, transition: Transition) -> InvalidTransition {
        InvalidTransition {
            from: self.mode(),
            transition,
        }
    }

    /// Select an activity for viewing.
    pub fn select(&self, id: impl Into<String>) -> Result<Page> {
        match self.mode() {
            Mode::Idle | Mode::Viewing => Ok(Page::Activity(id.into())),
            Mode::Editing => Err(self.invalid(Transition::Select)),
        }
    }

    /// Clear the selection, including the edit mode.
    pub fn clear_selection(&self) -> Result<Page> {
        match self.mode() {
            Mode::Viewing | Mode::Editing => Ok(Page::Activities),
            Mode::Idle => Err(self.invalid(Transition::ClearSelection)),
        }
    }

    pub fn open_form(&self) -> Result<Page> {
        match (self.mode(), &self.id) {
            (Mode::Viewing, Some(id)) => Ok(Page::Manage(id.clone())),
            _ => Err(self.invalid(Transition::OpenForm)),
        }
    }

    pub fn close_form(&self) -> Result<Page> {
        match (self.mode(), &self.id) {
            (Mode::Editing, Some(id)) => Ok(Page::Activity(id.clone())),
            _ => Err(self.invalid(Transition::CloseForm)),
        }
    }
}
