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

use crate::command::Action;
use crate::entity::{Entity, Role};
use crate::error::{Error, Result};
use crate::object::ObjectRef;
use clap::{ArgAction, Parser};

/// Manage the access control list (ACL) of a Cloud Storage object.
///
/// Without `--entity` prints all the entries in the object ACL. With
/// `--entity` prints the entry for that entity, or creates or deletes it when
/// combined with `--create` or `--delete`.
#[derive(Clone, Debug, Parser)]
#[command(name = "object-acl", version, about)]
pub struct Args {
    /// The name of the bucket containing the object.
    pub bucket: String,

    /// The name of the object.
    pub object: String,

    /// The ACL entity, for example `allAuthenticatedUsers` or
    /// `user-jane@example.com`.
    #[arg(long)]
    pub entity: Option<String>,

    /// Grant `--role` to the entity.
    #[arg(long, requires = "entity", conflicts_with = "delete")]
    pub create: bool,

    /// Remove the entity from the ACL.
    #[arg(long, requires = "entity")]
    pub delete: bool,

    /// The role granted with `--create`, either READER or OWNER.
    #[arg(long, requires = "create", default_value = "READER")]
    pub role: String,

    /// Operate on this generation of the object instead of the live version.
    #[arg(long)]
    pub generation: Option<i64>,

    /// Override the default service endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log more details to stderr, repeat for more verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validates the arguments and returns the action they select.
    pub fn action(&self) -> Result<Action> {
        if self.bucket.is_empty() {
            return Err(Error::InvalidArgument("empty bucket name".to_string()));
        }
        if self.object.is_empty() {
            return Err(Error::InvalidArgument("empty object name".to_string()));
        }
        let Some(entity) = &self.entity else {
            return Ok(Action::List);
        };
        let entity = entity.parse::<Entity>()?;
        let action = if self.create {
            Action::Add {
                entity,
                role: self.role.parse::<Role>()?,
            }
        } else if self.delete {
            Action::Remove { entity }
        } else {
            Action::Get { entity }
        };
        Ok(action)
    }

    pub fn object_ref(&self) -> ObjectRef {
        let object = ObjectRef::new(&self.bucket, &self.object);
        match self.generation {
            Some(g) => object.with_generation(g),
            None => object,
        }
    }

    /// The maximum level for the diagnostics printed to stderr.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
