use serde::{Deserialize, Serialize};

/// How a punch record was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Origin {
    #[default]
    Manual,
    Automatic,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Manual => "MANUAL",
            Origin::Automatic => "AUTOMATIC",
        }
    }

    pub fn is_automatic(self) -> bool {
        matches!(self, Origin::Automatic)
    }
}
