#![allow(dead_code)]

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use taskmig::api::Fetch;
use taskmig::libs::error::FetchError;
use taskmig::libs::source::{File, Folder, List, Note, Reminder, Subtask, Task};

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn time1() -> DateTime<Utc> {
    at("2013-08-30T08:29:46.203Z")
}

pub fn time2() -> DateTime<Utc> {
    at("2013-08-30T08:36:13.273Z")
}

pub fn time3() -> DateTime<Utc> {
    at("2013-09-05T08:36:13.273Z")
}

pub fn time4() -> DateTime<Utc> {
    at("2013-08-02T11:58:55Z")
}

pub fn folder(id: i64, title: &str, list_ids: &[i64]) -> Folder {
    Folder {
        id,
        title: title.to_string(),
        list_ids: list_ids.to_vec(),
        created_at: time1(),
        updated_at: time2(),
    }
}

pub fn list(id: i64, title: &str, created_at: DateTime<Utc>) -> List {
    List {
        id,
        title: title.to_string(),
        created_at,
    }
}

pub fn task(id: i64, list_id: i64, done: bool) -> Task {
    Task {
        id,
        list_id,
        title: format!("Ipsum{}", id),
        created_at: time1(),
        due_date: Some("2013-09-05".to_string()),
        completed: done,
        completed_at: if done { Some(time1()) } else { Some(at("1970-01-01T00:00:00Z")) },
        assignee_id: Some(123),
    }
}

pub fn note(id: i64, task_id: i64, content: &str) -> Note {
    Note {
        id,
        task_id,
        content: content.to_string(),
        created_at: time3(),
        updated_at: time2(),
    }
}

pub fn file(id: i64, task_id: i64, list_id: i64, url: &str, name: &str) -> File {
    File {
        id,
        task_id,
        list_id,
        url: url.to_string(),
        file_name: name.to_string(),
        content_type: "text/plain".to_string(),
        file_size: 12345,
        created_at: time2(),
        updated_at: time4(),
    }
}

pub fn reminder(id: i64, task_id: i64, date: DateTime<Utc>) -> Reminder {
    Reminder {
        id,
        task_id,
        date,
        created_at: date,
        updated_at: date,
    }
}

pub fn subtask(id: i64, task_id: i64, title: &str) -> Subtask {
    Subtask {
        id,
        task_id,
        title: title.to_string(),
        created_at: time4(),
    }
}

/// Serves payloads from memory; unknown URLs answer 404.
///
/// An optional per-URL delay lets tests finish downloads out of source order.
#[derive(Default)]
pub struct MemoryFetcher {
    payloads: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, payload: &[u8]) -> Self {
        self.payloads.insert(url.to_string(), payload.to_vec());
        self
    }

    pub fn delay(mut self, url: &str, millis: u64) -> Self {
        self.delays.insert(url.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetch for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.payloads
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(StatusCode::NOT_FOUND))
    }
}

/// Never finishes a download.
pub struct StallingFetcher;

impl Fetch for StallingFetcher {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        std::future::pending().await
    }
}
