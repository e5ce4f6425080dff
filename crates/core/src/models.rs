use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Taiwan,
    Generic,
}

impl Locale {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Taiwan => "tw",
            Self::Generic => "default",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "tw" | "zh-tw" | "taiwan" | "台灣" => Ok(Self::Taiwan),
            "default" | "generic" | "預設" => Ok(Self::Generic),
            other => Err(CoreError::UnknownLocale(other.to_string())),
        }
    }
}

/// Which branch of the responder produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Screening,
    Breakup,
    Cat,
    Goal,
    Positive,
    Negative,
    Neutral,
    Encouragement,
}

/// Routes chosen by a fixed trigger phrase, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseRoute {
    Breakup,
    Cat,
    Goal,
}

impl From<PhraseRoute> for Route {
    fn from(value: PhraseRoute) -> Self {
        match value {
            PhraseRoute::Breakup => Self::Breakup,
            PhraseRoute::Cat => Self::Cat,
            PhraseRoute::Goal => Self::Goal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Three-tier summary of how many trigger phrases a screening found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Watch,
    Evaluate,
    Urgent,
}

impl SeverityLevel {
    /// Buckets a summed hit count. Any nonzero score lands on `Evaluate` or
    /// higher, so `Watch` only comes back for a score of zero.
    pub fn from_score(score: usize) -> Self {
        if score >= 3 {
            Self::Urgent
        } else if score >= 1 {
            Self::Evaluate
        } else {
            Self::Watch
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Self::Watch => 1,
            Self::Evaluate => 2,
            Self::Urgent => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Watch => "可能需要關注",
            Self::Evaluate => "建議尋求專業評估",
            Self::Urgent => "強烈建議尋求專業協助",
        }
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Watch),
            2 => Ok(Self::Evaluate),
            3 => Ok(Self::Urgent),
            other => Err(CoreError::SeverityOutOfRange(other)),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueHit {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screening {
    pub hits: Vec<IssueHit>,
    pub score: usize,
    pub level: SeverityLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub route: Route,
    pub severity: Option<SeverityLevel>,
    pub issues: Vec<IssueHit>,
}

impl Reply {
    pub(crate) fn plain(route: Route, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            route,
            severity: None,
            issues: Vec::new(),
        }
    }
}
