use serde::Deserialize;

use crate::platform::error::PlatformError;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Any non-zero `code` is a rejection, whatever the HTTP status said.
    pub fn into_data(self) -> Result<T, PlatformError> {
        if self.code != 0 {
            return Err(PlatformError::Rejected {
                code: self.code,
                message: self.msg,
            });
        }

        self.data.ok_or_else(|| PlatformError::Rejected {
            code: self.code,
            message: "response carried no data".to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterListData {
    #[serde(default)]
    pub volume_items: Vec<VolumeItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(default)]
    pub chapter_items: Vec<ChapterItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterItem {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_vip: i64,
    #[serde(default)]
    pub is_auth: i64,
}

impl ChapterItem {
    pub fn is_locked(&self) -> bool {
        self.is_vip != 0 && self.is_auth == 0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterContentData {
    pub chapter_info: ChapterInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterInfo {
    #[serde(rename = "SSPrice")]
    pub ss_price: u64,
}

/// Chapter ids exceed what some clients keep exact as numbers, so both encodings are accepted.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
