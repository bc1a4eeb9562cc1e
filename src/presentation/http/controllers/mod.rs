// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod catalog;
pub mod films;
pub mod relations;
pub mod reviews;
pub mod upload;
pub mod users;

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// `?film_id=` filter shared by the relation and review listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FilmFilter {
    /// Restrict to one film.
    pub film_id: Option<i64>,
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::double_option;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        photo: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"photo":null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"photo":"a.jpg"}"#).unwrap();
        assert_eq!(absent.photo, None);
        assert_eq!(null.photo, Some(None));
        assert_eq!(value.photo, Some(Some("a.jpg".to_string())));
    }
}
