//! Movie entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `movie` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
}

/// DTO for creating a new movie. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
}

/// DTO for updating an existing movie.
///
/// An absent field keeps its stored value. A field sent as `null` fails to
/// decode: every column is required, so `null` can never be stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "present_value")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "present_value")]
    pub genre: Option<String>,
}

/// Only runs for keys present in the input (absent keys fall back to
/// `#[serde(default)]`), and decodes the value as a plain `T`, so `null`
/// is reported as a type error.
fn present_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_absent_fields_are_none() {
        let patch: UpdateMovie = serde_json::from_str(r#"{"genre": "Thriller"}"#).unwrap();
        assert_eq!(patch.genre.as_deref(), Some("Thriller"));
        assert!(patch.title.is_none());
        assert!(patch.director.is_none());
        assert!(patch.release_year.is_none());
    }

    #[test]
    fn update_empty_object_is_empty_patch() {
        let patch: UpdateMovie = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none() && patch.genre.is_none());
    }

    #[test]
    fn update_null_text_field_is_rejected() {
        let err = serde_json::from_str::<UpdateMovie>(r#"{"title": null}"#).unwrap_err();
        assert!(err.to_string().contains("invalid type: null"), "{err}");
    }

    #[test]
    fn update_null_year_is_rejected() {
        assert!(serde_json::from_str::<UpdateMovie>(r#"{"release_year": null}"#).is_err());
    }
}
