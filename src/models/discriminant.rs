use crate::models::Category;
use crate::utils::constants::{FIELD_CATEGORY, FIELD_TYPE};

/// Which record key carried the category name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscriminantKey {
    #[default]
    Type,
    Category,
}

impl DiscriminantKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscriminantKey::Type => FIELD_TYPE,
            DiscriminantKey::Category => FIELD_CATEGORY,
        }
    }
}

/// The category name exactly as received, together with its key, so a
/// record projects back under the same key and spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminant {
    key: DiscriminantKey,
    name: String,
}

impl Discriminant {
    pub fn new(key: DiscriminantKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }

    /// `type` key with the canonical wire spelling, for records built in code
    pub fn wire(category: Category) -> Self {
        Self::new(DiscriminantKey::Type, category.as_str())
    }

    pub fn key(&self) -> DiscriminantKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.name)
    }
}
