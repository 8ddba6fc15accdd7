//! Tag entity for labelling recipes.

/// A user-owned label that can be attached to any number of recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

/// Input data for creating a new tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub user_id: i64,
    pub name: String,
}
