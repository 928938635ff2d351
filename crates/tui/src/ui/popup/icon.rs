//! Static icon alias table.
//!
//! Callers only ever name an icon by alias; the glyph behind it is an
//! opaque rendering resource.

use std::fmt;
use std::str::FromStr;

use super::error::PopupError;

/// Icons the popup can show next to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Work in progress.
    Waiting,
    /// Plain information.
    Info,
}

const ICON_TABLE: [(&str, Icon); 2] = [("waiting", Icon::Waiting), ("info", Icon::Info)];

impl Icon {
    /// Look up an icon by alias.
    ///
    /// Aliases are case-sensitive; anything outside the table is an
    /// [`PopupError::InvalidIconAlias`].
    pub fn from_alias(alias: &str) -> Result<Self, PopupError> {
        ICON_TABLE
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, icon)| *icon)
            .ok_or_else(|| PopupError::InvalidIconAlias {
                alias: alias.to_string(),
            })
    }

    pub fn alias(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Info => "info",
        }
    }

    /// Glyph drawn for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Waiting => "⏳",
            Self::Info => "ℹ",
        }
    }

    /// Every alias in the table.
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        ICON_TABLE.iter().map(|(name, _)| *name)
    }
}

impl FromStr for Icon {
    type Err = PopupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}
