use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for movies
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieID(pub Uuid);

impl Default for MovieID {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieID {
    pub fn new() -> Self {
        MovieID(Uuid::now_v7())
    }

    pub fn parse_str(id: &str) -> Result<Self, ModelError> {
        let uuid = id.parse().map_err(|_| {
            ModelError::InvalidIdentifier(format!("not a movie id: {id}"))
        })?;
        Ok(MovieID(uuid))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for MovieID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for MovieID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for shows
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowID(pub Uuid);

impl Default for ShowID {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowID {
    pub fn new() -> Self {
        ShowID(Uuid::now_v7())
    }

    pub fn parse_str(id: &str) -> Result<Self, ModelError> {
        let uuid = id.parse().map_err(|_| {
            ModelError::InvalidIdentifier(format!("not a show id: {id}"))
        })?;
        Ok(ShowID(uuid))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ShowID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ShowID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
