//! Session registry
//!
//! Sessions are addressed by a monotonically increasing id and expire after a
//! configurable idle time. Every access through [`SessionRegistry::get_mut`]
//! refreshes the idle clock.

use super::Session;
use crate::errors::{Error, Result};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

pub type SessionId = u64;

#[derive(Debug)]
struct Entry {
    session: Session,
    last_used: Instant,
}

#[derive(Debug)]
pub struct SessionRegistry {
    sessions: FxHashMap<SessionId, Entry>,
    next_id: SessionId,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        SessionRegistry {
            sessions: FxHashMap::default(),
            next_id: 1,
            ttl,
        }
    }

    /// Open a fresh session and return its id
    pub fn create(&mut self) -> SessionId {
        self.create_at(Instant::now())
    }

    fn create_at(&mut self, now: Instant) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;
        self.sessions.insert(
            id,
            Entry {
                session: Session::new(),
                last_used: now,
            },
        );
        tracing::info!(session = id, open = self.sessions.len(), "session created");
        id
    }

    pub fn get(&self, id: SessionId) -> Result<&Session> {
        self.sessions
            .get(&id)
            .map(|entry| &entry.session)
            .ok_or(Error::SessionNotFound { id })
    }

    /// Mutable access; marks the session as used
    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.get_mut_at(id, Instant::now())
    }

    fn get_mut_at(&mut self, id: SessionId, now: Instant) -> Result<&mut Session> {
        let entry = self
            .sessions
            .get_mut(&id)
            .ok_or(Error::SessionNotFound { id })?;
        entry.last_used = now;
        Ok(&mut entry.session)
    }

    /// Close a session, discarding its engines
    pub fn remove(&mut self, id: SessionId) -> Result<Session> {
        let entry = self
            .sessions
            .remove(&id)
            .ok_or(Error::SessionNotFound { id })?;
        tracing::info!(session = id, "session closed");
        Ok(entry.session)
    }

    /// Drop sessions idle for longer than the TTL; returns how many went away
    pub fn expire_idle(&mut self) -> usize {
        self.expire_idle_at(Instant::now())
    }

    fn expire_idle_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.sessions.len();
        self.sessions.retain(|id, entry| {
            let keep = now.saturating_duration_since(entry.last_used) <= ttl;
            if !keep {
                tracing::info!(session = *id, "session expired");
            }
            keep
        });
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::parse_script;

    #[test]
    fn ids_are_unique_and_sessions_independent() {
        let mut registry = SessionRegistry::new(Duration::from_secs(60));
        let a = registry.create();
        let b = registry.create();
        assert_ne!(a, b);

        let commands = parse_script("bst insert 7").unwrap();
        registry.get_mut(a).unwrap().run(&commands);
        assert_eq!(registry.get(a).unwrap().tree().in_order(), vec![7]);
        assert!(registry.get(b).unwrap().tree().in_order().is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut registry = SessionRegistry::new(Duration::from_secs(60));
        assert!(matches!(
            registry.get_mut(42),
            Err(Error::SessionNotFound { id: 42 })
        ));
    }

    #[test]
    fn removed_sessions_are_gone() {
        let mut registry = SessionRegistry::new(Duration::from_secs(60));
        let id = registry.create();
        registry.remove(id).unwrap();
        assert!(registry.get(id).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn idle_sessions_expire_and_touched_ones_survive() {
        let mut registry = SessionRegistry::new(Duration::from_secs(10));
        let start = Instant::now();
        let idle = registry.create_at(start);
        let busy = registry.create_at(start);

        registry.get_mut_at(busy, start + Duration::from_secs(8)).unwrap();
        let expired = registry.expire_idle_at(start + Duration::from_secs(15));

        assert_eq!(expired, 1);
        assert!(registry.get(idle).is_err());
        assert!(registry.get(busy).is_ok());
    }
}
