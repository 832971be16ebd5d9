use crate::{Activity, UpdateActivity};

/// Edit form of a single activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityForm {
    pub id: String,
    pub fields: UpdateActivity,
    pub submitting: bool,
    /// Reason of the last failed submission
    pub error: Option<String>,
}

impl ActivityForm {
    #[must_use]
    pub fn new(activity: &Activity) -> Self {
        let Activity {
            id,
            title,
            date,
            description,
            category,
        } = activity.clone();
        Self {
            id,
            fields: UpdateActivity {
                title,
                date,
                description,
                category,
            },
            submitting: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Description,
    Category,
}

impl ActivityForm {
    pub fn set(&mut self, field: FormField, value: String) {
        let fields = &mut self.fields;
        match field {
            FormField::Title => fields.title = value,
            FormField::Date => fields.date = value,
            FormField::Description => fields.description = value,
            FormField::Category => fields.category = value,
        }
    }
}

/// Kind of input that can show a stored date without changing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateInput {
    /// `YYYY-MM-DD`
    #[default]
    Day,
    /// Date and time without an offset
    Local,
    /// Date and time with an offset, e.g. `Z` or `+02:00`
    Text,
}

impl DateInput {
    #[must_use]
    pub fn of(date: &str) -> Self {
        let Some((_, time)) = date.split_once('T') else {
            return Self::Day;
        };
        if time.contains(['Z', 'z', '+', '-']) {
            Self::Text
        } else {
            Self::Local
        }
    }

    /// Value of the `type` attribute of an HTML input.
    #[must_use]
    pub const fn html_type(self) -> &'static str {
        match self {
            Self::Day => "date",
            Self::Local => "datetime-local",
            Self::Text => "text",
        }
    }
}

impl ActivityForm {
    #[must_use]
    pub fn date_input(&self) -> DateInput {
        DateInput::of(&self.fields.date)
    }
}
