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

//! Manage the access control list (ACL) of a Cloud Storage object.
//!
//! This crate backs the `object-acl` command-line tool. The tool lists the
//! ACL of an object, prints the entry for a single entity, grants a role to an
//! entity, or removes the entity from the ACL. All the work is delegated to
//! the [StorageControl] client; this crate only selects the operation and
//! formats the results.
//!
//! [StorageControl]: google_cloud_storage::client::StorageControl

pub mod acl;
pub mod args;
pub mod command;
pub mod entity;
pub mod error;
pub mod object;

pub use error::{Error, Result};
