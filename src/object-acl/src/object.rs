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

//! Identify the object whose ACL is managed.

/// A Cloud Storage object, optionally pinned to a generation.
///
/// Formats as `gs://{bucket}/{object}`. The generation is not part of the
/// formatted name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub object: String,
    pub generation: Option<i64>,
}

impl ObjectRef {
    pub fn new<B, O>(bucket: B, object: O) -> Self
    where
        B: Into<String>,
        O: Into<String>,
    {
        Self {
            bucket: bucket.into(),
            object: object.into(),
            generation: None,
        }
    }

    /// Pins the reference to a specific object generation.
    pub fn with_generation(mut self, generation: i64) -> Self {
        self.generation = Some(generation);
        self
    }

    /// The bucket name in the format expected by the client library.
    pub fn bucket_name(&self) -> String {
        format!("projects/_/buckets/{}", self.bucket)
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let object = ObjectRef::new("my-bucket", "path/to/my-object");
        assert_eq!(object.to_string(), "gs://my-bucket/path/to/my-object");
        let object = object.with_generation(1234);
        assert_eq!(object.to_string(), "gs://my-bucket/path/to/my-object");
        assert_eq!(object.generation, Some(1234));
    }

    #[test]
    fn bucket_name() {
        let object = ObjectRef::new("my-bucket", "my-object");
        assert_eq!(object.bucket_name(), "projects/_/buckets/my-bucket");
    }
}
