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

//! Client options for [Google Cloud Storage].
//!
//! This crate assembles the connection options a Storage client needs: the
//! project id naming the billing and resource scope, and the credentials to
//! authenticate with. The credentials are carried through verbatim; this
//! crate never inspects or refreshes them. There is no emulator variant for
//! this service.
//!
//! ```
//! use gclouj_storage::StorageOptions;
//! let credentials = auth::credentials::anonymous::Builder::new().build();
//! let options = StorageOptions::new("my-project", credentials);
//! assert_eq!(options.project_id(), "my-project");
//! ```
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub use auth::credentials::Credentials;

/// Connection options for a Storage client.
///
/// The value is immutable once constructed.
#[derive(Clone, Debug)]
pub struct StorageOptions {
    project_id: String,
    credentials: Credentials,
}

impl StorageOptions {
    /// Creates options scoped to `project_id`, authenticating with
    /// `credentials`.
    ///
    /// ```
    /// use gclouj_storage::StorageOptions;
    /// let credentials = auth::credentials::anonymous::Builder::new().build();
    /// let options = StorageOptions::new("my-project", credentials);
    /// assert_eq!(options.project_id(), "my-project");
    /// ```
    pub fn new<P: Into<String>>(project_id: P, credentials: Credentials) -> Self {
        Self {
            project_id: project_id.into(),
            credentials,
        }
    }

    /// The project id this client operates on.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The credentials the client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
