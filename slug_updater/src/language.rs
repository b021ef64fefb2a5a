use std::{fmt, str::FromStr};

use crate::Error;

/// Regional languages a record can carry a video link for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Telugu,
    Assamese,
    Konkani,
    Gujarati,
    Malayalam,
    Marathi,
    Manipuri,
    Mizo,
    Odia,
    Punjabi,
    Tamil,
    Bengali,
    Kashmiri,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::Telugu,
        Language::Assamese,
        Language::Konkani,
        Language::Gujarati,
        Language::Malayalam,
        Language::Marathi,
        Language::Manipuri,
        Language::Mizo,
        Language::Odia,
        Language::Punjabi,
        Language::Tamil,
        Language::Bengali,
        Language::Kashmiri,
        Language::Kannada,
    ];

    /// The key used for this language under a record's `data` document.
    pub fn code(self) -> &'static str {
        match self {
            Language::Telugu => "te",
            Language::Assamese => "as",
            Language::Konkani => "kok",
            Language::Gujarati => "gu",
            Language::Malayalam => "ml",
            Language::Marathi => "mr",
            Language::Manipuri => "mni",
            Language::Mizo => "lus",
            Language::Odia => "or",
            Language::Punjabi => "pa",
            Language::Tamil => "ta",
            Language::Bengali => "bn",
            Language::Kashmiri => "ks",
            Language::Kannada => "kn",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Telugu => "Telugu",
            Language::Assamese => "Assamese",
            Language::Konkani => "Konkani",
            Language::Gujarati => "Gujarati",
            Language::Malayalam => "Malayalam",
            Language::Marathi => "Marathi",
            Language::Manipuri => "Manipuri",
            Language::Mizo => "Mizo",
            Language::Odia => "Odia",
            Language::Punjabi => "Punjabi",
            Language::Tamil => "Tamil",
            Language::Bengali => "Bengali",
            Language::Kashmiri => "Kashmiri",
            Language::Kannada => "Kannada",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}
