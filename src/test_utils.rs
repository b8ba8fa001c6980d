// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for playing a canned Kubernetes API server.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that answers requests from a (method, path) table.
/// Unmatched requests get a 404 Status, which is what a cluster without the
/// resource answers too.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Answer GET requests for the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("GET", path, status, body);
        self
    }

    /// Answer POST requests for the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("POST", path, status, body);
        self
    }

    /// Build a kube Client backed by this mock
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    fn insert(&self, method: &str, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
    }

    fn lookup(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let response = self.lookup(req.method().as_str(), req.uri().path());

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| {
                (
                    404,
                    r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#
                        .to_string(),
                )
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// A CRD JSON response, optionally carrying the Established condition
pub fn crd_json(name: &str, established: bool) -> String {
    let plural = name.split('.').next().unwrap_or(name);
    let group = name.strip_prefix(plural).unwrap_or("").trim_start_matches('.');
    let conditions = if established {
        serde_json::json!([{ "type": "Established", "status": "True" }])
    } else {
        serde_json::json!([{ "type": "Established", "status": "False" }])
    };

    serde_json::json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": { "name": name, "uid": "test-uid" },
        "spec": {
            "group": group,
            "names": { "plural": plural, "kind": "Test" },
            "scope": "Cluster",
            "versions": [{ "name": "v1beta1", "served": true, "storage": true }]
        },
        "status": { "conditions": conditions }
    })
    .to_string()
}

/// A 409 AlreadyExists Status response for a CRD create
pub fn conflict_json(name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("customresourcedefinitions.apiextensions.k8s.io \"{}\" already exists", name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

/// A 422 Invalid Status response for a CRD create
pub fn rejected_json(name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("CustomResourceDefinition.apiextensions.k8s.io \"{}\" is invalid", name),
        "reason": "Invalid",
        "code": 422
    })
    .to_string()
}
