//! The three mutually exclusive sections of the guide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Which instructional block is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSection {
    /// PC submission walkthrough
    #[default]
    #[serde(rename = "pc")]
    Desktop,
    /// Mobile submission walkthrough
    Mobile,
    /// Deposit notes, network restrictions and upload requirements
    Notes,
}

impl ActiveSection {
    /// All sections in tab order.
    pub const ALL: [ActiveSection; 3] = [
        ActiveSection::Desktop,
        ActiveSection::Mobile,
        ActiveSection::Notes,
    ];

    /// Stable identifier used in markup and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ActiveSection::Desktop => "pc",
            ActiveSection::Mobile => "mobile",
            ActiveSection::Notes => "notes",
        }
    }
}

impl fmt::Display for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActiveSection {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveSection::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| GuideError::UnknownSection(s.to_string()))
    }
}
