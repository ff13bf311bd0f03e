//! In-memory, per-process session store.
//!
//! One advising session holds the intermediate state between catalog load and
//! recommendation: course records, interest scores, requirement targets.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::course::CourseRecord;
use crate::requirements::Requirements;

#[derive(Debug, Clone)]
pub struct Session {
    pub courses: Vec<CourseRecord>,
    pub interest_scores: HashMap<String, f64>,
    pub requirements: Option<Requirements>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// A fresh session seeded with a loaded catalog.
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self {
            courses,
            interest_scores: HashMap::new(),
            requirements: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session under a fresh id, returning the id.
    pub fn insert(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, session);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Applies `f` to the stored session. Returns false when the id is unknown.
    pub fn update<F: FnOnce(&mut Session)>(&self, id: Uuid, f: F) -> bool {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        match sessions.get_mut(&id) {
            Some(session) => {
                f(session);
                true
            }
            None => false,
        }
    }
}
