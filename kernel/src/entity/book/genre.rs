use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookGenre {
    Mystery,
    Thriller,
    Romance,
    Fantasy,
    HistoricalFiction,
    Biography,
    Memoir,
    Horror,
    Adventure,
    Drama,
    Crime,
}

impl Display for BookGenre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookGenre::Mystery => "mystery",
            BookGenre::Thriller => "thriller",
            BookGenre::Romance => "romance",
            BookGenre::Fantasy => "fantasy",
            BookGenre::HistoricalFiction => "historical-fiction",
            BookGenre::Biography => "biography",
            BookGenre::Memoir => "memoir",
            BookGenre::Horror => "horror",
            BookGenre::Adventure => "adventure",
            BookGenre::Drama => "drama",
            BookGenre::Crime => "crime",
        };
        write!(f, "{name}")
    }
}
