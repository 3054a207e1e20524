use crate::pokemon;

use serde::{Deserialize, Serialize};

/// A named link to another resource of the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

impl Resource {
    /// The numeric id embedded in the URL, i.e. its second-to-last path segment.
    ///
    /// Resource URLs always end with a slash: `.../pokemon-species/1/`.
    pub fn id(&self) -> Option<pokemon::Id> {
        let segments: Vec<&str> = self.url.split('/').collect();

        segments
            .len()
            .checked_sub(2)
            .and_then(|index| segments[index].parse().ok())
            .and_then(pokemon::Id::new)
    }
}
