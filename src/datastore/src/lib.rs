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

//! Client options for [Google Cloud Datastore].
//!
//! This crate assembles the connection options a Datastore client needs. It
//! performs no validation and no I/O: malformed project ids or rejected
//! credentials surface from the client that consumes the options, not from
//! here.
//!
//! Options come in two flavors, and each has its own constructor so the two
//! cannot be mixed at a call site:
//!
//! - [DatastoreOptions::new] targets the production service and attaches
//!   credentials.
//! - [DatastoreOptions::emulator] targets a [Datastore emulator] listening on
//!   a local port and attaches no credentials, as emulators accept
//!   unauthenticated requests.
//!
//! ## Example: production options
//!
//! ```
//! use gclouj_datastore::DatastoreOptions;
//! let credentials = auth::credentials::anonymous::Builder::new().build();
//! let options = DatastoreOptions::new("my-project", "my-namespace", credentials);
//! assert_eq!(options.project_id(), "my-project");
//! assert!(options.host().is_none());
//! ```
//!
//! ## Example: emulator options
//!
//! ```
//! use gclouj_datastore::DatastoreOptions;
//! let options = DatastoreOptions::emulator("my-project", 8081);
//! assert_eq!(options.host(), Some("localhost:8081"));
//! assert!(options.credentials().is_none());
//! ```
//!
//! [Google Cloud Datastore]: https://cloud.google.com/datastore
//! [Datastore emulator]: https://cloud.google.com/datastore/docs/tools/datastore-emulator

pub use auth::credentials::Credentials;

/// Connection options for a Datastore client.
///
/// The value is immutable once constructed. Exactly one of the credentials or
/// the emulator host is set, depending on which constructor produced it.
#[derive(Clone, Debug)]
pub struct DatastoreOptions {
    project_id: String,
    namespace: Option<String>,
    credentials: Option<Credentials>,
    host: Option<String>,
}

impl DatastoreOptions {
    /// Creates options for the production service.
    ///
    /// The credentials are carried through to the client verbatim; this crate
    /// never inspects them.
    ///
    /// ```
    /// use gclouj_datastore::DatastoreOptions;
    /// let credentials = auth::credentials::anonymous::Builder::new().build();
    /// let options = DatastoreOptions::new("my-project", "staging", credentials);
    /// assert_eq!(options.namespace(), Some("staging"));
    /// assert!(options.credentials().is_some());
    /// ```
    pub fn new<P, N>(project_id: P, namespace: N, credentials: Credentials) -> Self
    where
        P: Into<String>,
        N: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            namespace: Some(namespace.into()),
            credentials: Some(credentials),
            host: None,
        }
    }

    /// Creates options for a local emulator listening on `port`.
    ///
    /// The host is `localhost:<port>`. No namespace or credentials are set:
    /// emulators accept unauthenticated requests.
    ///
    /// ```
    /// use gclouj_datastore::DatastoreOptions;
    /// let options = DatastoreOptions::emulator("my-project", 8081);
    /// assert_eq!(options.host(), Some("localhost:8081"));
    /// ```
    pub fn emulator<P: Into<String>>(project_id: P, port: u16) -> Self {
        Self {
            project_id: project_id.into(),
            namespace: None,
            credentials: None,
            host: Some(format!("localhost:{port}")),
        }
    }

    /// The project id this client connects to.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The namespace used to partition entities within the project, if any.
    ///
    /// Only set on production options; emulator options leave the namespace
    /// at the service default.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The credentials, if any. Emulator options carry none.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The emulator host override, if any. Production options carry none.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::CacheableResource;
    use http::Extensions;
    use test_case::test_case;

    fn test_credentials() -> Credentials {
        auth::credentials::anonymous::Builder::new().build()
    }

    #[test]
    fn production_options() {
        let options = DatastoreOptions::new("my-project", "my-namespace", test_credentials());
        assert_eq!(options.project_id(), "my-project");
        assert_eq!(options.namespace(), Some("my-namespace"));
        assert!(options.credentials().is_some());
        assert!(options.host().is_none(), "{options:?}");
    }

    #[test_case(0, "localhost:0")]
    #[test_case(443, "localhost:443")]
    #[test_case(8081, "localhost:8081")]
    #[test_case(u16::MAX, "localhost:65535")]
    fn emulator_options(port: u16, expected_host: &str) {
        let options = DatastoreOptions::emulator("my-project", port);
        assert_eq!(options.project_id(), "my-project");
        assert_eq!(options.host(), Some(expected_host));
        assert!(options.namespace().is_none(), "{options:?}");
        assert!(options.credentials().is_none(), "{options:?}");
    }

    #[test]
    fn each_call_builds_a_fresh_value() {
        let a = DatastoreOptions::emulator("my-project", 8081);
        let b = DatastoreOptions::emulator("my-project", 8081);
        assert_eq!(a.project_id(), b.project_id());
        assert_eq!(a.host(), b.host());
        // Field-equal, but separately allocated.
        assert_ne!(a.project_id().as_ptr(), b.project_id().as_ptr());
    }

    #[tokio::test]
    async fn credentials_are_forwarded_unchanged() -> anyhow::Result<()> {
        let options = DatastoreOptions::new("my-project", "my-namespace", test_credentials());
        let credentials = options.credentials().expect("production options");
        // Anonymous credentials contribute no auth headers; the options must
        // not have altered that.
        match credentials.headers(Extensions::new()).await? {
            CacheableResource::New { data, .. } => assert!(data.is_empty(), "{data:?}"),
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        }
        Ok(())
    }
}
