#![allow(dead_code)]

use axum::extract::ConnectInfo;
use geoip_api::prelude::*;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::Layer;

/// In-memory resolver keyed by address literal.
#[derive(Default)]
pub struct FixtureResolver {
    records: HashMap<String, GeoRecord>,
    calls: AtomicUsize,
}

impl FixtureResolver {
    pub fn with_record(mut self, address: &str, record: GeoRecord) -> Self {
        self.records.insert(address.to_string(), record);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoResolver for FixtureResolver {
    fn resolve(&self, address: &str) -> Result<Option<GeoRecord>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.get(address).cloned())
    }

    fn database_info(&self) -> DatabaseInfo {
        DatabaseInfo {
            database_type: "fixture-country-asn".to_string(),
            ip_version: 6,
            build_epoch: 1_714_521_600,
        }
    }
}

/// Resolver whose database is always corrupt.
pub struct BrokenResolver;

impl GeoResolver for BrokenResolver {
    fn resolve(&self, address: &str) -> Result<Option<GeoRecord>, ResolveError> {
        Err(ResolveError {
            address: address.to_string(),
            reason: "invalid search tree pointer".to_string(),
        })
    }

    fn database_info(&self) -> DatabaseInfo {
        DatabaseInfo {
            database_type: "broken".to_string(),
            ip_version: 4,
            build_epoch: 0,
        }
    }
}

pub fn google_record() -> GeoRecord {
    GeoRecord {
        country_name: Some("United States".to_string()),
        country_code: Some("US".to_string()),
        continent_code: Some("NA".to_string()),
        continent_name: Some("North America".to_string()),
        asn: Some(15169),
        as_name: Some("Google LLC".to_string()),
    }
}

pub fn test_directory() -> LocationDirectory {
    LocationDirectory::from_entries(vec![
        LocationEntry {
            country_code: "US".to_string(),
            colo: "SJC".to_string(),
            latitude: 37.3,
            longitude: -121.9,
            region: "California".to_string(),
            city: "San Jose".to_string(),
        },
        LocationEntry {
            country_code: "US".to_string(),
            colo: "IAD".to_string(),
            latitude: 38.9,
            longitude: -77.4,
            region: "Virginia".to_string(),
            city: "Ashburn".to_string(),
        },
        LocationEntry {
            country_code: "DE".to_string(),
            colo: "FRA".to_string(),
            latitude: 50.1,
            longitude: 8.7,
            region: "Europe".to_string(),
            city: "Frankfurt".to_string(),
        },
    ])
}

pub fn create_test_state(resolver: Arc<dyn GeoResolver>, behind_proxy: bool) -> AppState {
    let service = EnrichmentService::new(resolver, Arc::new(test_directory()));
    AppState::new(Arc::new(service), behind_proxy)
}

/// Inserts a fixed peer address so handlers can extract `ConnectInfo`.
#[derive(Clone)]
pub struct MockConnectInfoLayer(pub SocketAddr);

impl Default for MockConnectInfoLayer {
    fn default() -> Self {
        Self("127.0.0.1:12345".parse().unwrap())
    }
}

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.0,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
