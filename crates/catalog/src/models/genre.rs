use super::GenreId;

/// An entry of the genre table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
impl Genre {
    pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}
impl<I: Into<GenreId>, N: Into<String>> From<(I, N)> for Genre {
    fn from((id, name): (I, N)) -> Self {
        Self::new(id, name)
    }
}
