use std::fmt;

use serde::{Deserialize, Serialize};

/// Defines an opaque identifier.
///
/// The API emits ids as JSON numbers but accepts them as path segments, so ids
/// deserialize from either a string or an integer and are kept as text.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "crate::api::str_or_int::deserialize")] String);

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                $name(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name(id.to_owned())
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(format!("{}", id))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

// PROJECTS

id_type!(ProjectId);
id_type!(AccountId);

// EXPERIMENTS

id_type!(ExperimentId);
id_type!(VariationId);

// AUDIENCES

id_type!(AudienceId);

// PAGES

id_type!(
    /// Page ids are sent to the API as numbers, see [`crate::resource::Pages`].
    PageId
);

// CAMPAIGNS

id_type!(CampaignId);
