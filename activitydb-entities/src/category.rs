use std::fmt;

/// Free-form label of an activity.
///
/// The label is not restricted to [`Category::KNOWN`], but only
/// the known labels have an image.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Category(String);

impl Category {
    pub const DRINKS: &'static str = "drinks";
    pub const CULTURE: &'static str = "culture";
    pub const FILM: &'static str = "film";
    pub const FOOD: &'static str = "food";
    pub const MUSIC: &'static str = "music";
    pub const TRAVEL: &'static str = "travel";

    pub const KNOWN: [&'static str; 6] = [
        Self::DRINKS,
        Self::CULTURE,
        Self::FILM,
        Self::FOOD,
        Self::MUSIC,
        Self::TRAVEL,
    ];

    const IMAGE_DIR: &'static str = "/Images/categoryImages";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.as_str())
    }

    pub fn image_path(&self) -> String {
        format!("{}/{}.jpg", Self::IMAGE_DIR, self.0)
    }
}

impl From<String> for Category {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Category {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Category> for String {
    fn from(from: Category) -> Self {
        from.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
