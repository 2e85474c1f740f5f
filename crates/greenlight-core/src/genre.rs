use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical genre taxonomy. Variant order is the canonical enumeration
/// order used for deterministic tie-breaks; `COUNT` is the entropy
/// normalization base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Romance,
    Documentary,
}

impl Genre {
    pub const COUNT: usize = 9;

    pub const ALL: [Genre; Genre::COUNT] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Romance,
        Genre::Documentary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Romance => "Romance",
            Genre::Documentary => "Documentary",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
