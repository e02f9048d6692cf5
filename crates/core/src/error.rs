#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as the caller supplied it; a path segment that is not a
    /// valid integer still names a record that does not exist.
    #[error("No {entity} found with the id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for the not-found case of the `movie` entity.
    pub fn movie_not_found(id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity: crate::movie::ENTITY,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::movie_not_found(999999);
        assert_eq!(err.to_string(), "No movie found with the id 999999");
    }

    #[test]
    fn not_found_keeps_raw_identifier_text() {
        let err = CoreError::movie_not_found("abc");
        assert_eq!(err.to_string(), "No movie found with the id abc");
    }

    #[test]
    fn movie_not_found_builds_not_found_variant() {
        assert_matches!(
            CoreError::movie_not_found(7),
            CoreError::NotFound { entity: "movie", id } if id == "7"
        );
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = CoreError::Validation("title must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: title must not be empty");
    }
}
