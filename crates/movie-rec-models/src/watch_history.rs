use crate::id_list::MovieIdList;

/// Movies a user has already watched
///
/// History is append-only: once recorded, a movie stays watched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    ids: MovieIdList,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(field: &str) -> Self {
        Self { ids: MovieIdList::parse(field) }
    }

    pub fn to_field(&self) -> String {
        self.ids.to_field()
    }

    pub fn add(&mut self, movie_id: &str) -> bool {
        self.ids.add(movie_id)
    }

    pub fn contains(&self, movie_id: &str) -> bool {
        self.ids.contains(movie_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
