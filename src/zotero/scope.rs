use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZoteroError;

/// Which Zotero library a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryScope {
    /// A personal library, by user ID
    User(u64),
    /// A shared library, by group ID
    Group(u64),
}

impl LibraryScope {
    /// Build a scope from a library type and an ID
    pub fn new(library_type: LibraryType, id: u64) -> Self {
        match library_type {
            LibraryType::Users => LibraryScope::User(id),
            LibraryType::Groups => LibraryScope::Group(id),
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            LibraryScope::User(id) | LibraryScope::Group(id) => *id,
        }
    }

    pub fn library_type(&self) -> LibraryType {
        match self {
            LibraryScope::User(_) => LibraryType::Users,
            LibraryScope::Group(_) => LibraryType::Groups,
        }
    }

    /// Path prefix for this library, e.g. `users/475425`
    pub fn path_prefix(&self) -> String {
        format!("{}/{}", self.library_type().as_str(), self.id())
    }

    /// Join a resource path onto this library's prefix
    pub(crate) fn path(&self, resource: &str) -> String {
        format!("{}/{}", self.path_prefix(), resource.trim_start_matches('/'))
    }
}

impl fmt::Display for LibraryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_prefix())
    }
}

/// Library kind as stored by hosts and used in URL paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    #[default]
    Users,
    Groups,
}

impl LibraryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Users => "users",
            LibraryType::Groups => "groups",
        }
    }
}

impl FromStr for LibraryType {
    type Err = ZoteroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" | "user" => Ok(LibraryType::Users),
            "groups" | "group" => Ok(LibraryType::Groups),
            other => Err(ZoteroError::InvalidSettings {
                message: format!("unknown library type '{other}'"),
            }),
        }
    }
}
