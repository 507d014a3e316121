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

//! Client options for [Google Cloud BigQuery].
//!
//! This crate assembles the connection options a BigQuery client needs. The
//! project id names the billing and resource scope for every job the client
//! runs; all the other settings stay at the client library defaults. Nothing
//! is validated here: a project id the service does not recognize is rejected
//! by the service on first use, not by this constructor.
//!
//! ```
//! use gclouj_bigquery::BigQueryOptions;
//! let options = BigQueryOptions::new("my-project");
//! assert_eq!(options.project_id(), "my-project");
//! ```
//!
//! [Google Cloud BigQuery]: https://cloud.google.com/bigquery

/// Connection options for a BigQuery client.
///
/// The value is immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigQueryOptions {
    project_id: String,
}

impl BigQueryOptions {
    /// Creates options scoped to `project_id`.
    ///
    /// ```
    /// use gclouj_bigquery::BigQueryOptions;
    /// let options = BigQueryOptions::new("my-project");
    /// assert_eq!(options.project_id(), "my-project");
    /// ```
    pub fn new<P: Into<String>>(project_id: P) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    /// The project id this client bills jobs to.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}
