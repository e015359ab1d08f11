use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::chat::ChatSession;
use super::ledger::BookingLedger;
use crate::catalog::{seed_bookings, Catalog};
use crate::config::Config;
use crate::error::AppError;
use crate::models::ChatMessage;

/// State owned by one client page lifetime.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub ledger: BookingLedger,
    pub chat: ChatSession,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            session_id: self.id,
            created_at: self.created_at,
        }
    }
}

/// What a client learns about its session on open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Clone)]
struct Entry {
    session: SharedSession,
    shutdown: CancellationToken,
    last_seen: Arc<AtomicI64>,
}

impl Entry {
    fn touch(&self, now: DateTime<Utc>) {
        self.last_seen.store(now.timestamp_millis(), Ordering::Relaxed);
    }

    fn idle_since(&self) -> i64 {
        self.last_seen.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Entry>>,
    root: CancellationToken,
    catalog: Catalog,
    nightly_rate: u64,
    seed_demo_bookings: bool,
    reply_delay: Duration,
}

impl SessionStore {
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            root: CancellationToken::new(),
            catalog,
            nightly_rate: config.booking.nightly_rate,
            seed_demo_bookings: config.features.seed_demo_bookings,
            reply_delay: config.chat.reply_delay(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let seed = if self.seed_demo_bookings { seed_bookings() } else { Vec::new() };
        let session = Session {
            id,
            ledger: BookingLedger::new(self.nightly_rate, seed),
            chat: ChatSession::new(),
            created_at: now,
        };
        let entry = Entry {
            session: Arc::new(Mutex::new(session)),
            shutdown: self.root.child_token(),
            last_seen: Arc::new(AtomicI64::new(now.timestamp_millis())),
        };
        self.sessions.insert(id, entry);
        info!("Session {} opened ({} live)", id, self.sessions.len());
        id
    }

    /// Looks a session up and marks it as active.
    pub fn get(&self, id: Uuid) -> Result<SharedSession, AppError> {
        let entry = self.entry(id)?;
        entry.touch(Utc::now());
        Ok(entry.session)
    }

    fn entry(&self, id: Uuid) -> Result<Entry, AppError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::UnknownSession(id))
    }

    /// Removes the session and cancels any reply still waiting to land.
    pub fn close(&self, id: Uuid) -> bool {
        match self.sessions.remove(&id) {
            Some((_, entry)) => {
                entry.shutdown.cancel();
                info!("Session {} closed", id);
                true
            }
            None => false,
        }
    }

    pub fn close_all(&self) {
        self.root.cancel();
        self.sessions.clear();
        info!("All sessions closed");
    }

    /// Closes sessions not touched within `ttl` of `now`.
    pub fn sweep_idle(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize {
        // A cutoff before chrono's earliest date means nothing is idle yet.
        let Some(cutoff) = now.checked_sub_signed(ttl) else {
            return 0;
        };
        let cutoff = cutoff.timestamp_millis();
        let expired: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().idle_since() < cutoff)
            .map(|entry| *entry.key())
            .collect();
        expired.iter().filter(|id| self.close(**id)).count()
    }

    /// Appends the user's chat message now and the bot reply after the
    /// configured delay. Returns `None` for blank input.
    pub async fn post_chat_message(&self, id: Uuid, text: &str) -> Result<Option<ChatMessage>, AppError> {
        let entry = self.entry(id)?;
        entry.touch(Utc::now());

        let mut session = entry.session.lock().await;
        let Some((user, reply)) = session.chat.submit(self.catalog.suggestions(), text) else {
            return Ok(None);
        };

        if self.reply_delay.is_zero() {
            session.chat.push_bot(reply);
        } else {
            drop(session);
            self.schedule_reply(&entry, reply);
        }
        Ok(Some(user))
    }

    fn schedule_reply(&self, entry: &Entry, reply: String) {
        let session = Arc::downgrade(&entry.session);
        let shutdown = entry.shutdown.clone();
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Session closed before reply was delivered");
                }
                _ = tokio::time::sleep(delay) => {
                    let Some(session) = session.upgrade() else {
                        return;
                    };
                    let mut session = session.lock().await;
                    if shutdown.is_cancelled() {
                        return;
                    }
                    session.chat.push_bot(reply);
                }
            }
        });
    }

    /// Periodically sweeps idle sessions until the store is shut down.
    pub fn spawn_sweeper(&self, interval: Duration, ttl: TimeDelta) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = store.root.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {
                        let swept = store.sweep_idle(Utc::now(), ttl);
                        if swept > 0 {
                            info!("Swept {} idle sessions", swept);
                        }
                    }
                }
            }
        })
    }
}
