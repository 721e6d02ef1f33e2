//! Wire types exchanged with the remote gateway.

use serde::{Deserialize, Deserializer, Serialize};

/// Go-style backends encode empty slices as `null`.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(d)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    pub name: String,

    #[serde(default)]
    pub path: String,

    #[serde(rename = "size", default)]
    pub capacity_bytes: i64,

    #[serde(rename = "fit", default)]
    pub fit_strategy: String,

    #[serde(rename = "mountedPartitions", default)]
    pub mounted_partitions: u32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub partitions: Vec<Partition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,

    #[serde(rename = "size", default)]
    pub size_bytes: i64,

    #[serde(rename = "type", default)]
    pub partition_type: String,

    #[serde(rename = "fit", default)]
    pub fit_strategy: String,

    #[serde(rename = "isMounted", default)]
    pub is_mounted: bool,

    #[serde(
        rename = "id",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub mount_id: Option<String>,
}

impl Partition {
    /// Mount id usable for browse requests; only mounted partitions have one.
    pub fn active_mount_id(&self) -> Option<&str> {
        if !self.is_mounted {
            return None;
        }
        self.mount_id.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Folder,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    #[serde(rename = "size", default)]
    pub size_bytes: i64,

    #[serde(default)]
    pub permissions: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
}

impl DirectoryEntry {
    pub fn is_folder(&self) -> bool {
        self.entry_type == EntryType::Folder
    }
}

#[derive(Debug, Serialize)]
pub struct ExecuteRequest<'a> {
    pub command: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecuteResponse {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn output_text(&self) -> Option<&str> {
        self.output.as_deref().filter(|o| !o.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisksResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disks: Vec<Disk>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DisksResponse {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub size: i64,
}

pub fn format_bytes(bytes: i64) -> String {
    if bytes <= 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Disk and partition sizes are shown in MB, switching to GB past 1024 MB.
pub fn format_capacity(bytes: i64) -> String {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    if mb >= 1024.0 {
        format!("{:.2} GB", mb / 1024.0)
    } else {
        format!("{:.2} MB", mb)
    }
}
