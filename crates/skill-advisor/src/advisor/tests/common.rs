use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::advisor::content;
use crate::advisor::domain::{GameMode, Goal, Membership, Profile, ProfileId};
use crate::advisor::repository::{ProfileRecord, ProfileStore, StoreError};
use crate::advisor::service::AdvisorService;

pub(super) fn build_service() -> (AdvisorService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AdvisorService::new(store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<BTreeMap<ProfileId, ProfileRecord>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStore {
    pub(super) fn saves(&self) -> usize {
        *self.saves.lock().expect("store mutex poisoned")
    }

    pub(super) fn stored(&self) -> Option<Profile> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(&ProfileId::primary())
            .map(|record| record.profile.clone())
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(record.id.clone(), record);
        *self.saves.lock().expect("store mutex poisoned") += 1;
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn load(&self, _id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn save(&self, _record: ProfileRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

/// Main, free-to-play, combat goal, one hour to play, lopsided combat stats.
pub(super) fn combat_scenario() -> Profile {
    Profile::new(GameMode::Main, Membership::Free)
        .with_goal(Goal::Combat)
        .with_playtime(60)
        .with_skill("attack", 10)
        .with_skill("strength", 5)
        .with_skill("defence", 3)
        .with_skill("hitpoints", 10)
        .with_skill("ranged", 1)
        .with_skill("magic", 1)
        .with_skill("prayer", 1)
}

pub(super) fn hardcore_profile() -> Profile {
    Profile::new(GameMode::HardcoreIronman, Membership::Paid)
}

/// Every subset of the known goals.
pub(super) fn goal_combinations() -> Vec<Vec<Goal>> {
    (0..1u32 << Goal::ALL.len())
        .map(|mask| {
            Goal::ALL
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, goal)| *goal)
                .collect()
        })
        .collect()
}

pub(super) fn with_goals(mut profile: Profile, goals: &[Goal]) -> Profile {
    for goal in goals {
        profile = profile.with_goal(*goal);
    }
    profile
}

/// A spread of skill sheets: fresh, mid-game, maxed and lopsided.
pub(super) fn skill_sheets() -> Vec<Vec<(&'static str, i64)>> {
    let every_skill = |level: i64| -> Vec<(&'static str, i64)> {
        content::SKILLS.iter().map(|info| (info.key, level)).collect()
    };
    vec![
        Vec::new(),
        every_skill(45),
        every_skill(99),
        vec![
            ("attack", 70),
            ("strength", 72),
            ("defence", 40),
            ("mining", 60),
            ("smithing", 40),
            ("agility", 2),
            ("thieving", 50),
        ],
    ]
}

pub(super) fn with_skills(mut profile: Profile, sheet: &[(&str, i64)]) -> Profile {
    for (skill, level) in sheet {
        profile = profile.with_skill(skill, *level);
    }
    profile
}

/// Hiscores body with the given skills set and everything else at 1.
pub(super) fn hiscores_payload(levels: &[(&str, i64)]) -> String {
    let mut lines = vec!["51234,300,1500000".to_string()];
    for (rank, info) in content::SKILLS.iter().enumerate() {
        let level = levels
            .iter()
            .find(|(skill, _)| *skill == info.key)
            .map(|(_, level)| *level)
            .unwrap_or(1);
        lines.push(format!("{},{level},{}", rank + 1000, level * 100));
    }
    lines.push("-1,-1".to_string());
    lines.join("\n")
}

pub(super) fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request builds")
}

pub(super) fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) fn raw_request(
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
