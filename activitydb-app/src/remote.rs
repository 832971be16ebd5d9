/// Remote data as seen by the presentation components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Remote<T> {
    #[default]
    Unloaded,
    Loading,
    Loaded(T),
    NotFound,
    /// The reason of the failure
    Errored(String),
}

impl<T> Remote<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Remote<&T> {
        match self {
            Self::Unloaded => Remote::Unloaded,
            Self::Loading => Remote::Loading,
            Self::Loaded(value) => Remote::Loaded(value),
            Self::NotFound => Remote::NotFound,
            Self::Errored(reason) => Remote::Errored(reason.clone()),
        }
    }
}

impl<T> From<Result<Option<T>, String>> for Remote<T> {
    fn from(from: Result<Option<T>, String>) -> Self {
        match from {
            Ok(Some(value)) => Self::Loaded(value),
            Ok(None) => Self::NotFound,
            Err(reason) => Self::Errored(reason),
        }
    }
}
