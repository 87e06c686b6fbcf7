//! Accessor Visibility Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::INVALID_VISIBILITY_MESSAGE;
use crate::error::Error;

/// Value Object: Accessor Visibility
///
/// Access level attached to a dependency accessor when its declaration is
/// created. Only the three levels below exist; any other textual level is
/// rejected with [`Error::InvalidConfiguration`].
///
/// ## Example
///
/// ```rust
/// use lazydep_domain::Visibility;
///
/// let level: Visibility = "public".parse().unwrap();
/// assert_eq!(level, Visibility::Public);
/// assert!("internal".parse::<Visibility>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Callable only from the instance itself
    #[default]
    Private,
    /// Callable from anywhere
    Public,
    /// Callable from the instance and from instances of related classes
    Protected,
}

impl Visibility {
    /// All recognized levels
    pub const ALL: [Visibility; 3] = [Self::Private, Self::Public, Self::Protected];

    /// Lowercase name of the level
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            _ => Err(Error::invalid_configuration(INVALID_VISIBILITY_MESSAGE)),
        }
    }
}
