use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Fallback shown when a record carries no bio text.
pub const NO_BIO_FALLBACK: &str = "No bio";

/// Decoration asset attached to an avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarDecoration {
    pub asset: Option<String>,
    pub sku_id: Option<String>,
}

/// The payload returned by the identifier-lookup endpoint.
///
/// Upstream treats this as a mostly-optional bag of attributes. Every field
/// deserializes to `None` when absent rather than failing the lookup, and
/// unknown fields are ignored, so schema drift on the server side never turns
/// into a client error. Only a handful of fields are displayed; the rest are
/// carried through untouched and reappear in `--output json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupRecord {
    pub id: Option<String>,
    pub bot: Option<bool>,
    pub system: Option<bool>,
    pub flags: Option<i64>,
    pub username: Option<String>,
    pub global_name: Option<String>,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub banner_color: Option<String>,
    pub accent_color: Option<i64>,
    pub avatar_decoration_data: Option<AvatarDecoration>,
    pub clan: Option<serde_json::Value>,
    pub verified: Option<bool>,
    pub mfa_enabled: Option<bool>,
    pub purchased_flags: Option<i64>,
    pub premium_usage_flags: Option<i64>,
    pub phone: Option<String>,
    pub nsfw_allowed: Option<bool>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub pronouns: Option<String>,
    pub premium_type: Option<i64>,
    pub created_timestamp: Option<i64>,
    #[serde(rename = "defaultAvatarURL")]
    pub default_avatar_url: Option<String>,
    pub hex_accent_color: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "avatarURL")]
    pub avatar_url: Option<String>,
    #[serde(rename = "displayAvatarURL")]
    pub display_avatar_url: Option<String>,
    #[serde(rename = "bannerURL")]
    pub banner_url: Option<String>,
}

impl LookupRecord {
    /// Bio text with the upstream fallback for absent or empty values.
    #[must_use]
    pub fn bio_or_fallback(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.is_empty() => bio,
            _ => NO_BIO_FALLBACK,
        }
    }

    /// Join date derived from the creation timestamp (epoch milliseconds),
    /// rendered in the local timezone.
    #[must_use]
    pub fn join_date(&self) -> Option<String> {
        let millis = self.created_timestamp?;
        let when = DateTime::from_timestamp_millis(millis)?;
        Some(when.with_timezone(&Local).format("%-d %B %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_and_unknown_fields() {
        let record: LookupRecord = serde_json::from_str(
            r#"{ "id": "123", "username": "alice", "someFutureField": true }"#,
        )
        .expect("partial payload should deserialize");

        assert_eq!(record.id.as_deref(), Some("123"));
        assert_eq!(record.username.as_deref(), Some("alice"));
        assert!(record.email.is_none());
        assert!(record.created_timestamp.is_none());
    }

    #[test]
    fn camel_case_fields_map_onto_snake_case() {
        let record: LookupRecord = serde_json::from_str(
            r#"{
                "globalName": "Alice",
                "createdTimestamp": 1609459200000,
                "avatarDecorationData": { "asset": "a", "skuId": "s" },
                "displayAvatarURL": "http://cdn/avatar.png"
            }"#,
        )
        .expect("camelCase payload should deserialize");

        assert_eq!(record.global_name.as_deref(), Some("Alice"));
        assert_eq!(record.created_timestamp, Some(1_609_459_200_000));
        let decoration = record.avatar_decoration_data.expect("decoration");
        assert_eq!(decoration.sku_id.as_deref(), Some("s"));
        assert_eq!(record.display_avatar_url.as_deref(), Some("http://cdn/avatar.png"));
    }

    #[test]
    fn bio_falls_back_when_absent_or_empty() {
        let absent = LookupRecord::default();
        assert_eq!(absent.bio_or_fallback(), NO_BIO_FALLBACK);

        let empty = LookupRecord {
            bio: Some(String::new()),
            ..LookupRecord::default()
        };
        assert_eq!(empty.bio_or_fallback(), NO_BIO_FALLBACK);

        let present = LookupRecord {
            bio: Some("hello".to_string()),
            ..LookupRecord::default()
        };
        assert_eq!(present.bio_or_fallback(), "hello");
    }

    #[test]
    fn join_date_requires_a_timestamp() {
        assert!(LookupRecord::default().join_date().is_none());

        let record = LookupRecord {
            created_timestamp: Some(1_609_459_200_000),
            ..LookupRecord::default()
        };
        let date = record.join_date().expect("timestamp should format");
        assert!(!date.is_empty());
    }
}
