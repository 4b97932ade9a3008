use super::AuthorId;

/// An entry of the author table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author {
    pub id: AuthorId,
    /// Name shown in list previews, the detail view, and the author filter.
    pub name: String,
}
impl Author {
    pub fn new(id: impl Into<AuthorId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}
impl<I: Into<AuthorId>, N: Into<String>> From<(I, N)> for Author {
    fn from((id, name): (I, N)) -> Self {
        Self::new(id, name)
    }
}
