use base64::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A migrated task. Every point in time is in epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
    /// Set only when `done` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    pub created: i64,
    pub description: String,
    pub attachments: Vec<Attachment>,
    pub reminders: Vec<i64>,
    /// A kind is absent when the task has no relation of that kind.
    pub related_tasks: BTreeMap<RelationKind, Vec<RelatedTask>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Subtask,
}

/// A related task known only by its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTask {
    pub text: String,
}

/// A file attached to a task, payload included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file: AttachmentFile,
    /// When the file was attached to the task.
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentFile {
    pub name: String,
    pub mime: String,
    pub size: i64,
    pub created: i64,
    #[serde(serialize_with = "encode_content", deserialize_with = "decode_content")]
    pub content: Vec<u8>,
}

fn encode_content<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64_STANDARD.encode(content))
}

fn decode_content<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    BASE64_STANDARD.decode(encoded).map_err(serde::de::Error::custom)
}
