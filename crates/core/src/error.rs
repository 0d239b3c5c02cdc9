use thiserror::Error;

/// Rejections produced when adding a title to the watchlist.
///
/// Both are ordinary user-triggerable outcomes. The `Display` text is the
/// message a host shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please type in a movie name!")]
    EmptyName,

    /// The normalized name is already on the active list. Its watch count
    /// has still been incremented by the time this is returned.
    #[error("That movie name is already on your list!")]
    DuplicateName { name: String },
}

impl ValidationError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }

    /// Name that was rejected, if the rejection carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::DuplicateName { name } => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_user_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Please type in a movie name!");
        let dup = ValidationError::DuplicateName { name: "dune".to_owned() };
        assert_eq!(dup.to_string(), "That movie name is already on your list!");
    }

    #[test]
    fn test_duplicate_carries_name() {
        let dup = ValidationError::DuplicateName { name: "alien".to_owned() };
        assert!(dup.is_duplicate());
        assert_eq!(dup.name(), Some("alien"));
        assert_eq!(ValidationError::EmptyName.name(), None);
    }
}
