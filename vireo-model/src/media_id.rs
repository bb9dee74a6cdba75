use crate::ids::{MovieID, ShowID};
use uuid::Uuid;

/// Identifier for any playable or listable media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaID {
    Movie(MovieID),
    Show(ShowID),
}

impl MediaID {
    pub fn as_uuid(&self) -> &Uuid {
        match &self {
            MediaID::Movie(movie_id) => movie_id.as_uuid(),
            MediaID::Show(show_id) => show_id.as_uuid(),
        }
    }

    pub fn eq_movie(&self, other: &MovieID) -> bool {
        match (self, other) {
            (MediaID::Movie(MovieID(a)), MovieID(b)) => a == b,
            _ => false,
        }
    }

    pub fn eq_show(&self, other: &ShowID) -> bool {
        match (self, other) {
            (MediaID::Show(ShowID(a)), ShowID(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for MediaID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaID::Movie(id) => write!(f, "Movie({})", id.as_str()),
            MediaID::Show(id) => write!(f, "Show({})", id.as_str()),
        }
    }
}

impl From<MovieID> for MediaID {
    fn from(id: MovieID) -> Self {
        MediaID::Movie(id)
    }
}

impl From<ShowID> for MediaID {
    fn from(id: ShowID) -> Self {
        MediaID::Show(id)
    }
}
