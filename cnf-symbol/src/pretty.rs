//! Display-only symbols.

use std::fmt;
use std::rc::Rc;

use crate::Name;

/// A symbol in the form it takes once normalization is complete.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Pretty {
    /// Plain text: an original name, a decorated terminal or the start symbol.
    Text(Name),
    /// The rendering of a binarized suffix.
    Tuple(Rc<[Pretty]>),
}

impl Pretty {
    /// Text of the rendered start symbol.
    pub const START: &'static str = "start";

    /// Prefix of rendered forced terminals.
    pub const TERMINAL_PREFIX: &'static str = "T";

    /// Creates a text symbol.
    pub fn text(text: impl AsRef<str>) -> Self {
        Pretty::Text(text.as_ref().into())
    }

    /// Creates one text symbol per character.
    ///
    /// Handy for spelling out input strings over single-character alphabets.
    pub fn chars(text: &str) -> Vec<Self> {
        text.chars()
            .map(|ch| Pretty::Text(ch.to_string().into()))
            .collect()
    }

    /// Returns the text of a text symbol.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Pretty::Text(text) => Some(&text[..]),
            Pretty::Tuple(_) => None,
        }
    }
}

impl From<&str> for Pretty {
    fn from(text: &str) -> Self {
        Pretty::text(text)
    }
}

impl fmt::Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pretty::Text(text) => f.write_str(text),
            Pretty::Tuple(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                f.write_str(")")
            }
        }
    }
}
