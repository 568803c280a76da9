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

//! Run one ACL action and print its results.

use crate::acl::ObjectAcl;
use crate::entity::{Entity, Role};
use crate::error::Result;
use std::io::Write;

/// The operations supported by the command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print every entry in the ACL.
    List,
    /// Print the entry for one entity.
    Get { entity: Entity },
    /// Grant a role to an entity.
    Add { entity: Entity, role: Role },
    /// Remove an entity from the ACL.
    Remove { entity: Entity },
}

/// Runs `action` against `acl`, writing one line per result to `out`.
pub async fn run<W>(acl: &ObjectAcl<'_>, action: Action, out: &mut W) -> Result<()>
where
    W: Write,
{
    tracing::info!("running {action:?} on {}", acl.object());
    match action {
        Action::List => {
            for entry in acl.list().await? {
                writeln!(out, "{entry}")?;
            }
        }
        Action::Get { entity } => {
            let entry = acl.get(&entity).await?;
            writeln!(out, "{entry}")?;
        }
        Action::Add { entity, role } => {
            let entry = acl.add(&entity, role).await?;
            writeln!(
                out,
                "Added {} ({}) to {} ACL",
                entry.entity,
                entry.role,
                acl.object()
            )?;
        }
        Action::Remove { entity } => {
            acl.remove(&entity).await?;
            writeln!(out, "Deleted {entity} from {} ACL", acl.object())?;
        }
    }
    out.flush()?;
    Ok(())
}
