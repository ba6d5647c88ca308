//! Object types documented by the Plover domain.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SigError;

/// A directive kind in the Plover domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectType {
    /// Dictionary operator such as `{^}` or `{MODE:[mode]}`
    Operator,
    /// `cmd[:arg]` command, filed under the `cmd` namespace
    Command,
    /// Engine hook, documented as a function signature
    Hook,
    /// Key combination such as `{#Control_L(c)}`
    Combo,
}

impl ObjectType {
    /// All object types in registration order.
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Operator,
        ObjectType::Command,
        ObjectType::Hook,
        ObjectType::Combo,
    ];

    /// Directive and role name.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Operator => "operator",
            ObjectType::Command => "command",
            ObjectType::Hook => "hook",
            ObjectType::Combo => "combo",
        }
    }
}

/// Writes the directive name.
impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a bare directive name. Fails with [`SigError::UnknownDirective`]
/// listing the known names.
impl FromStr for ObjectType {
    type Err = SigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| SigError::UnknownDirective {
                name: s.to_string(),
                help: Some(format!(
                    "Known directives: {}",
                    ObjectType::ALL.map(|t| t.name()).join(", ")
                )),
            })
    }
}
