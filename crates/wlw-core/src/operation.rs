// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declared worker operation capability, matched by the control-plane when
//! handing out pending workspaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Create,
    Upgrade,
    All,
    #[serde(rename = "all+backup")]
    AllWithBackup,
}

impl Operation {
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Upgrade => "upgrade",
            Operation::All => "all",
            Operation::AllWithBackup => "all+backup",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "upgrade" => Ok(Operation::Upgrade),
            "all" => Ok(Operation::All),
            "all+backup" => Ok(Operation::AllWithBackup),
            other => Err(CoreError::InvalidOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_strings() {
        for op in [Operation::Create, Operation::Upgrade, Operation::All, Operation::AllWithBackup] {
            let s = op.as_wire_str();
            assert_eq!(s.parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn rejects_unknown_operation() {
        assert!("destroy-everything".parse::<Operation>().is_err());
    }
}
