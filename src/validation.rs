//! Player name validation

/// Name validation errors with messages fit to show the player
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,
}

/// Check a name supplied up front (CLI or config). Any non-empty text is
/// accepted exactly as given, the same rule the name prompt applies.
pub fn validate_player_name(name: &str) -> Result<String, NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(name.to_string())
}
