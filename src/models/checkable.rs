//! Checkable items (anything a branch can lend)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Physical format of a media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Book,
    Music,
    Video,
    Newspaper,
}

/// Variant-specific payload of a checkable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CheckableKind {
    Media {
        creator: Option<String>,
        media_type: Option<MediaType>,
    },
    ScienceKit,
    Ticket,
}

/// Variant tag used for lookups by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckableVariant {
    Media,
    ScienceKit,
    Ticket,
}

impl CheckableVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckableVariant::Media => "media",
            CheckableVariant::ScienceKit => "science_kit",
            CheckableVariant::Ticket => "ticket",
        }
    }
}

impl std::fmt::Display for CheckableVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckableVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(CheckableVariant::Media),
            "science_kit" => Ok(CheckableVariant::ScienceKit),
            "ticket" => Ok(CheckableVariant::Ticket),
            other => Err(format!("Unknown checkable variant: {}", other)),
        }
    }
}

/// Catalog entry. `code` is the unique catalog key (ISBN for books); an absent
/// code is still a key value and collides with another absent code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checkable {
    pub code: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub kind: CheckableKind,
}

impl Checkable {
    pub fn media(
        code: impl Into<String>,
        title: impl Into<String>,
        creator: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            code: Some(code.into()),
            title: Some(title.into()),
            kind: CheckableKind::Media {
                creator: Some(creator.into()),
                media_type: Some(media_type),
            },
        }
    }

    pub fn science_kit(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            title: Some(title.into()),
            kind: CheckableKind::ScienceKit,
        }
    }

    pub fn ticket(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            title: Some(title.into()),
            kind: CheckableKind::Ticket,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn variant(&self) -> CheckableVariant {
        match self.kind {
            CheckableKind::Media { .. } => CheckableVariant::Media,
            CheckableKind::ScienceKit => CheckableVariant::ScienceKit,
            CheckableKind::Ticket => CheckableVariant::Ticket,
        }
    }

    /// True when this item is keyed by `code`
    pub fn has_code(&self, code: Option<&str>) -> bool {
        self.code() == code
    }
}
