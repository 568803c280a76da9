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

//! Read and modify the ACL of a single object.
//!
//! Cloud Storage returns the ACL as part of the object metadata. Changes are
//! made with a read-modify-write cycle: the ACL is read with `get_object()`,
//! modified locally, and written back with `update_object()`. The update is
//! conditioned on the metageneration observed in the read, so a concurrent
//! change fails the update instead of being overwritten.

use crate::entity::{AclEntry, Entity, Role};
use crate::error::{Error, Result};
use crate::object::ObjectRef;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{Object, ObjectAccessControl};
use google_cloud_wkt::FieldMask;

/// The ACL of one Cloud Storage object.
#[derive(Clone, Debug)]
pub struct ObjectAcl<'a> {
    client: &'a StorageControl,
    object: ObjectRef,
}

impl<'a> ObjectAcl<'a> {
    pub fn new(client: &'a StorageControl, object: ObjectRef) -> Self {
        Self { client, object }
    }

    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// Returns all the entries in the object ACL.
    #[tracing::instrument(skip_all, fields(object = %self.object))]
    pub async fn list(&self) -> Result<Vec<AclEntry>> {
        let object = self.fetch().await?;
        Ok(object.acl.iter().map(AclEntry::from).collect())
    }

    /// Returns the ACL entry for `entity`.
    ///
    /// Fails with [Error::NotFound] if the ACL has no entry for the entity.
    #[tracing::instrument(skip_all, fields(object = %self.object, entity = %entity))]
    pub async fn get(&self, entity: &Entity) -> Result<AclEntry> {
        let object = self.fetch().await?;
        object
            .acl
            .iter()
            .find(|x| entity.matches(&x.entity))
            .map(AclEntry::from)
            .ok_or_else(|| self.not_found(entity))
    }

    /// Grants `role` to `entity`.
    ///
    /// If the ACL already has an entry for `entity` its role is replaced.
    /// Returns the entry as persisted by the service. The service may rewrite
    /// the entity, for example replacing a project ID with a project number.
    /// If the entry cannot be located in the response, returns the entry as
    /// it was written.
    #[tracing::instrument(skip_all, fields(object = %self.object, entity = %entity, %role))]
    pub async fn add(&self, entity: &Entity, role: Role) -> Result<AclEntry> {
        let object = self.fetch().await?;
        let mut acl = object.acl.clone();
        match acl.iter_mut().find(|x| entity.matches(&x.entity)) {
            Some(existing) => {
                tracing::info!("replacing role {} for {entity}", existing.role);
                existing.role = role.as_str().to_string();
            }
            None => acl.push(
                ObjectAccessControl::new()
                    .set_entity(entity.as_str())
                    .set_role(role.as_str()),
            ),
        }
        let updated = self.store(object, acl).await?;
        let entry = updated
            .acl
            .iter()
            .find(|x| entity.matches(&x.entity))
            .map(AclEntry::from)
            .unwrap_or_else(|| {
                tracing::debug!("{entity} not found in the updated ACL");
                AclEntry::new(entity.as_str(), role.as_str())
            });
        Ok(entry)
    }

    /// Removes the entry for `entity` from the ACL.
    ///
    /// Fails with [Error::NotFound], without modifying the object, if the ACL
    /// has no entry for the entity.
    #[tracing::instrument(skip_all, fields(object = %self.object, entity = %entity))]
    pub async fn remove(&self, entity: &Entity) -> Result<()> {
        let object = self.fetch().await?;
        let mut acl = object.acl.clone();
        let len = acl.len();
        acl.retain(|x| !entity.matches(&x.entity));
        if acl.len() == len {
            return Err(self.not_found(entity));
        }
        self.store(object, acl).await?;
        Ok(())
    }

    async fn fetch(&self) -> Result<Object> {
        let mut builder = self
            .client
            .get_object()
            .set_bucket(self.object.bucket_name())
            .set_object(&self.object.object);
        if let Some(generation) = self.object.generation {
            builder = builder.set_generation(generation);
        }
        let object = builder.send().await?;
        tracing::debug!(
            "fetched metadata, generation={}, metageneration={}, acl entries={}",
            object.generation,
            object.metageneration,
            object.acl.len()
        );
        Ok(object)
    }

    async fn store(&self, object: Object, acl: Vec<ObjectAccessControl>) -> Result<Object> {
        let metageneration = object.metageneration;
        let updated = self
            .client
            .update_object()
            .set_object(object.set_acl(acl))
            .set_if_metageneration_match(metageneration)
            .set_update_mask(FieldMask::default().set_paths(["acl"]))
            .send()
            .await?;
        tracing::debug!(
            "updated ACL, metageneration={}, acl entries={}",
            updated.metageneration,
            updated.acl.len()
        );
        Ok(updated)
    }

    fn not_found(&self, entity: &Entity) -> Error {
        Error::NotFound {
            entity: entity.to_string(),
            object: self.object.clone(),
        }
    }
}
