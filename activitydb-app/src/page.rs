use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters of an id that stay unescaped within a path segment
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client-side routes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Activities,
    Activity(String),
    Manage(String),
    NotFound,
}

impl Page {
    pub const ACTIVITIES_PATH: &'static str = "/activities";
    pub const MANAGE_PATH: &'static str = "/manage";

    /// Resolve the page from the path of an URL.
    ///
    /// Query strings and fragments are ignored,
    /// ids are percent-decoded.
    #[must_use]
    pub fn init(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => Self::Home,
            (Some("activities"), None, _) => Self::Activities,
            (Some("activities"), Some(id), None) => {
                decode_id(id).map_or(Self::NotFound, Self::Activity)
            }
            (Some("manage"), Some(id), None) => decode_id(id).map_or(Self::NotFound, Self::Manage),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Activities => Self::ACTIVITIES_PATH.to_owned(),
            Self::Activity(id) => format!("{}/{}", Self::ACTIVITIES_PATH, encode_id(id)),
            Self::Manage(id) => format!("{}/{}", Self::MANAGE_PATH, encode_id(id)),
            Self::NotFound => "/not-found".to_owned(),
        }
    }

    /// Pages that show the activity list together with the selected activity.
    #[must_use]
    pub const fn is_dashboard(&self) -> bool {
        matches!(self, Self::Activities | Self::Activity(_) | Self::Manage(_))
    }
}

fn encode_id(id: &str) -> Cow<'_, str> {
    utf8_percent_encode(id, ID_SEGMENT).into()
}

fn decode_id(segment: &str) -> Option<String> {
    match percent_decode_str(segment).decode_utf8() {
        Ok(id) => Some(id.into_owned()),
        Err(err) => {
            log::debug!("Invalid id in path segment {segment}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_from_path() {
        assert_eq!(Page::init("/"), Page::Home);
        assert_eq!(Page::init(""), Page::Home);
        assert_eq!(Page::init("/activities"), Page::Activities);
        assert_eq!(Page::init("/activities/"), Page::Activities);
        assert_eq!(Page::init("/activities/1"), Page::Activity("1".into()));
        assert_eq!(Page::init("/manage/1?x=y"), Page::Manage("1".into()));
        assert_eq!(Page::init("/manage"), Page::NotFound);
        assert_eq!(Page::init("/activities/1/2"), Page::NotFound);
        assert_eq!(Page::init("/foo"), Page::NotFound);
    }

    #[test]
    fn path_of_page() {
        for page in [
            Page::Home,
            Page::Activities,
            Page::Activity("abc".into()),
            Page::Manage("abc".into()),
        ] {
            assert_eq!(Page::init(&page.path()), page);
        }
        assert_eq!(Page::Manage("7".into()).path(), "/manage/7");
    }

    #[test]
    fn escape_ids_in_path() {
        assert_eq!(Page::Activity("a b".into()).path(), "/activities/a%20b");
        assert_eq!(Page::Manage("a/b".into()).path(), "/manage/a%2Fb");
        assert_eq!(
            Page::Activity("5f1c-4a.x_~".into()).path(),
            "/activities/5f1c-4a.x_~"
        );
        for id in ["a b", "a/b", "100%", "café", "a?b#c"] {
            let page = Page::Activity(id.into());
            assert_eq!(Page::init(&page.path()), page);
            let page = Page::Manage(id.into());
            assert_eq!(Page::init(&page.path()), page);
        }
    }

    #[test]
    fn unescape_ids_from_path() {
        assert_eq!(Page::init("/activities/a%20b"), Page::Activity("a b".into()));
        assert_eq!(Page::init("/manage/caf%C3%A9"), Page::Manage("café".into()));
        assert_eq!(Page::init("/activities/%FF"), Page::NotFound);
    }
}
