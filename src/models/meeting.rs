use clap::ValueEnum;
use serde::Serialize;

/// Meeting status extracted from the description (`Meeting` column).
///
/// `Unset` renders as the empty string and is never a filter choice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum,
)]
pub enum Meeting {
    #[default]
    #[value(skip)]
    Unset,
    Ja,
    Nein,
}

impl Meeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meeting::Unset => "",
            Meeting::Ja => "Ja",
            Meeting::Nein => "Nein",
        }
    }
}

impl std::fmt::Display for Meeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
