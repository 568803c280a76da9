// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entities, roles, and ACL entries.
//!
//! See <https://cloud.google.com/storage/docs/access-control/lists#scopes>
//! for the scopes accepted by Cloud Storage.

use crate::error::Error;
use google_cloud_storage::model::ObjectAccessControl;
use std::str::FromStr;

const ALL_USERS: &str = "allUsers";
const ALL_AUTHENTICATED_USERS: &str = "allAuthenticatedUsers";
const PROJECT_TEAMS: [&str; 3] = ["owners", "editors", "viewers"];
// Emails and domains are case-insensitive.
const CASE_INSENSITIVE_PREFIXES: [&str; 3] = ["user-", "group-", "domain-"];

/// The grantee of an ACL entry, such as `user-jane@example.com` or
/// `allAuthenticatedUsers`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity(String);

impl Entity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `other`, an entity reported by the service, refers to
    /// this entity.
    pub fn matches(&self, other: &str) -> bool {
        let case_insensitive = CASE_INSENSITIVE_PREFIXES
            .iter()
            .any(|p| self.0.starts_with(p));
        if case_insensitive {
            return self.0.eq_ignore_ascii_case(other);
        }
        self.0 == other
    }
}

impl FromStr for Entity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_USERS || s == ALL_AUTHENTICATED_USERS {
            return Ok(Self(s.to_string()));
        }
        if s.contains(char::is_whitespace) {
            return Err(Error::InvalidEntity(s.to_string()));
        }
        let principal = s.strip_prefix("user-").or_else(|| s.strip_prefix("group-"));
        let valid = if let Some(id) = principal {
            valid_principal(id)
        } else if let Some(domain) = s.strip_prefix("domain-") {
            valid_domain(domain)
        } else if let Some(team) = s.strip_prefix("project-") {
            valid_project_team(team)
        } else {
            false
        };
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidEntity(s.to_string()))
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Either an email address or an opaque ID.
fn valid_principal(id: &str) -> bool {
    match id.split_once('@') {
        Some((local, domain)) => !local.is_empty() && valid_domain(domain),
        None => !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}

fn valid_domain(domain: &str) -> bool {
    !domain.is_empty() && !domain.contains('@') && domain.split('.').all(|l| !l.is_empty())
}

// `{team}-{project}`, where the project is either an ID or a number.
fn valid_project_team(team: &str) -> bool {
    PROJECT_TEAMS.iter().any(|t| {
        team.strip_prefix(t)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|project| !project.is_empty())
    })
}

/// The roles that can be granted on an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Reader,
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reader => "READER",
            Self::Owner => "OWNER",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "READER" => Ok(Self::Reader),
            "OWNER" => Ok(Self::Owner),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(entity, role)` pair in an object ACL, as reported by the service.
///
/// The role is kept as the service reports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AclEntry {
    pub entity: String,
    pub role: String,
}

impl AclEntry {
    pub fn new<E, R>(entity: E, role: R) -> Self
    where
        E: Into<String>,
        R: Into<String>,
    {
        Self {
            entity: entity.into(),
            role: role.into(),
        }
    }
}

impl From<&ObjectAccessControl> for AclEntry {
    fn from(value: &ObjectAccessControl) -> Self {
        Self::new(value.entity.clone(), value.role.clone())
    }
}

impl std::fmt::Display for AclEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.entity, self.role)
    }
}
