
pub mod audience;
pub mod campaign;
pub mod error;
pub mod experiment;
pub mod id;
pub mod page;
pub mod project;
pub mod request;

use serde::Deserialize;

/// The body of a list endpoint.
///
/// Most collections answer with a bare array, some wrap it in `{"data": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Items(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListResponse<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Items(items) => items,
            ListResponse::Wrapped { data } => data,
        }
    }
}

// deserialize a str or an integer as String
pub(crate) mod str_or_int {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrInt {
        Str(String),
        Int(u64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StrOrInt::deserialize(deserializer)? {
            StrOrInt::Str(s) => Ok(s),
            StrOrInt::Int(int) => Ok(format!("{}", int)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListResponse;

    #[test]
    fn list_response_accepts_bare_and_wrapped_arrays() {
        let bare = serde_json::from_str::<ListResponse<u32>>("[3, 1, 2]").unwrap();
        assert_eq!(bare.into_items(), vec![3, 1, 2]);

        let wrapped =
            serde_json::from_str::<ListResponse<u32>>(r#"{"data": [3, 1, 2], "total": 3}"#)
                .unwrap();
        assert_eq!(wrapped.into_items(), vec![3, 1, 2]);
    }
}
