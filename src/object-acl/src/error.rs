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

//! Errors returned by the ACL operations.

use crate::object::ObjectRef;
use google_cloud_gax::error::rpc::Code;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for this crate.
///
/// Errors reported by the service are wrapped in [Error::Service] and returned
/// unchanged. The client library has already applied its retry policy by the
/// time the error is returned to this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The entity is not a valid ACL scope.
    #[error(
        "invalid ACL entity {0:?}, see https://cloud.google.com/storage/docs/access-control/lists#scopes"
    )]
    InvalidEntity(String),

    /// The role is not a valid object ACL role.
    #[error("invalid ACL role {0:?}, expected READER or OWNER")]
    InvalidRole(String),

    /// A command-line argument failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The object ACL has no entry for the entity.
    #[error("no ACL entry for {entity} in {object}")]
    NotFound { entity: String, object: ObjectRef },

    /// The service rejected the request.
    #[error(transparent)]
    Service(#[from] google_cloud_gax::error::Error),

    /// Writing the results failed.
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the ACL entry, the object, or the bucket do not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Service(e) => e.status().is_some_and(|s| s.code == Code::NotFound),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::error::rpc::Status;

    fn service_error(code: Code) -> Error {
        Error::Service(google_cloud_gax::error::Error::service(
            Status::default().set_code(code).set_message("test-only"),
        ))
    }

    #[test]
    fn not_found() {
        let err = Error::NotFound {
            entity: "allAuthenticatedUsers".to_string(),
            object: ObjectRef::new("my-bucket", "my-object"),
        };
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "no ACL entry for allAuthenticatedUsers in gs://my-bucket/my-object"
        );

        let err = service_error(Code::NotFound);
        assert!(err.is_not_found(), "{err:?}");
    }

    #[test]
    fn not_not_found() {
        let err = service_error(Code::FailedPrecondition);
        assert!(!err.is_not_found(), "{err:?}");
        let err = service_error(Code::PermissionDenied);
        assert!(!err.is_not_found(), "{err:?}");
        let err = Error::InvalidRole("WRITER".to_string());
        assert!(!err.is_not_found(), "{err:?}");
    }
}
