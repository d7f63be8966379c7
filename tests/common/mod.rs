//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use socialsync::{
    CacheInvalidator, EntityId, FollowCoordinator, QueryKey, RelationshipAction,
    RelationshipService, ServiceError,
};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;

// -- Cache mocks --------------------------------------------------------------

/// Invalidator that records every key it is asked to invalidate, in order.
#[derive(Default)]
pub struct RecordingInvalidator {
    keys: Mutex<Vec<QueryKey>>,
}

impl RecordingInvalidator {
    pub fn keys(&self) -> Vec<QueryKey> {
        self.keys.lock().clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.keys.lock().iter().map(ToString::to_string).collect()
    }

    pub fn count(&self) -> usize {
        self.keys.lock().len()
    }
}

impl CacheInvalidator for RecordingInvalidator {
    fn invalidate(&self, key: &QueryKey) {
        self.keys.lock().push(key.clone());
    }
}

// -- Service mocks ------------------------------------------------------------

/// Service that answers from a script and records every call.
///
/// When the script runs out it answers `Ok(true)`.
#[derive(Default)]
pub struct ScriptedService {
    script: Mutex<VecDeque<Result<bool, ServiceError>>>,
    calls: Mutex<Vec<(RelationshipAction, EntityId)>>,
}

impl ScriptedService {
    pub fn new(script: Vec<Result<bool, ServiceError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(RelationshipAction, EntityId)> {
        self.calls.lock().clone()
    }

    fn answer(&self, action: RelationshipAction, target: &EntityId) -> Result<bool, ServiceError> {
        self.calls.lock().push((action, target.clone()));
        self.script.lock().pop_front().unwrap_or(Ok(true))
    }
}

#[async_trait]
impl RelationshipService for ScriptedService {
    async fn follow_entity(&self, target: &EntityId) -> Result<bool, ServiceError> {
        self.answer(RelationshipAction::Follow, target)
    }

    async fn unfollow_entity(&self, target: &EntityId) -> Result<bool, ServiceError> {
        self.answer(RelationshipAction::Unfollow, target)
    }
}

/// Service that holds every call until `release` is called.
pub struct GatedService {
    pub started: Notify,
    gate: Notify,
    answer: Mutex<Result<bool, ServiceError>>,
}

impl GatedService {
    pub fn new(answer: Result<bool, ServiceError>) -> Self {
        Self {
            started: Notify::new(),
            gate: Notify::new(),
            answer: Mutex::new(answer),
        }
    }

    /// Let one waiting (or the next) call finish.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    async fn wait(&self) -> Result<bool, ServiceError> {
        self.started.notify_one();
        self.gate.notified().await;
        self.answer.lock().clone()
    }
}

#[async_trait]
impl RelationshipService for GatedService {
    async fn follow_entity(&self, _target: &EntityId) -> Result<bool, ServiceError> {
        self.wait().await
    }

    async fn unfollow_entity(&self, _target: &EntityId) -> Result<bool, ServiceError> {
        self.wait().await
    }
}

// -- Builders -----------------------------------------------------------------

pub fn scripted(
    script: Vec<Result<bool, ServiceError>>,
) -> (FollowCoordinator, Arc<ScriptedService>, Arc<RecordingInvalidator>) {
    let service = Arc::new(ScriptedService::new(script));
    let cache = Arc::new(RecordingInvalidator::default());
    let coordinator = FollowCoordinator::new(service.clone(), cache.clone());
    (coordinator, service, cache)
}

pub fn gated(
    answer: Result<bool, ServiceError>,
) -> (FollowCoordinator, Arc<GatedService>, Arc<RecordingInvalidator>) {
    let service = Arc::new(GatedService::new(answer));
    let cache = Arc::new(RecordingInvalidator::default());
    let coordinator = FollowCoordinator::new(service.clone(), cache.clone());
    (coordinator, service, cache)
}

pub const EXPECTED_U42: [&str; 4] = ["profile:u42", "profile:stats", "followers", "following"];
