use serde::Deserialize;

/// Body of a successful `channels.list` call. `items` is omitted entirely when
/// no channel matches the requested id.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Option<Vec<Channel>>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    pub id: Option<String>,
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<Counter>,
    pub view_count: Option<Counter>,
    pub video_count: Option<Counter>,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
}

/// The API encodes 64-bit counters as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Counter {
    Number(u64),
    Text(String),
}

impl Counter {
    pub fn value(&self) -> Option<u64> {
        match self {
            Counter::Number(n) => Some(*n),
            Counter::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub reason: Option<String>,
    pub domain: Option<String>,
}

impl ApiError {
    /// First machine-readable reason, e.g. `quotaExceeded` or `keyInvalid`.
    pub fn reason(&self) -> Option<&str> {
        self.errors.iter().find_map(|detail| detail.reason.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_counters() {
        let body = r#"{
            "kind": "youtube#channelListResponse",
            "items": [{
                "kind": "youtube#channel",
                "id": "UC123",
                "statistics": {
                    "viewCount": "123456789",
                    "subscriberCount": "4200",
                    "hiddenSubscriberCount": false,
                    "videoCount": "87"
                }
            }]
        }"#;

        let parsed: ChannelListResponse = serde_json::from_str(body).unwrap();
        let items = parsed.items.unwrap();
        let stats = items[0].statistics.as_ref().unwrap();

        assert_eq!(items[0].id.as_deref(), Some("UC123"));
        assert_eq!(stats.view_count.as_ref().and_then(Counter::value), Some(123_456_789));
        assert_eq!(stats.subscriber_count.as_ref().and_then(Counter::value), Some(4200));
        assert_eq!(stats.video_count.as_ref().and_then(Counter::value), Some(87));
        assert!(!stats.hidden_subscriber_count);
    }

    #[test]
    fn absent_items_parse_as_none() {
        let parsed: ChannelListResponse =
            serde_json::from_str(r#"{"kind":"youtube#channelListResponse","pageInfo":{"totalResults":0}}"#)
                .unwrap();
        assert!(parsed.items.is_none());
    }

    #[test]
    fn hidden_subscriber_count_omits_the_field() {
        let parsed: ChannelStatistics =
            serde_json::from_str(r#"{"viewCount":"10","hiddenSubscriberCount":true,"videoCount":"1"}"#)
                .unwrap();
        assert!(parsed.subscriber_count.is_none());
        assert!(parsed.hidden_subscriber_count);
    }

    #[test]
    fn numeric_counters_are_accepted() {
        let counter: Counter = serde_json::from_str("42").unwrap();
        assert_eq!(counter.value(), Some(42));
    }

    #[test]
    fn non_numeric_text_has_no_value() {
        assert_eq!(Counter::Text("lots".into()).value(), None);
        assert_eq!(Counter::Text("-5".into()).value(), None);
    }

    #[test]
    fn api_error_exposes_first_reason() {
        let body = r#"{
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{
                    "message": "The request cannot be completed because you have exceeded your quota.",
                    "domain": "youtube.quota",
                    "reason": "quotaExceeded"
                }]
            }
        }"#;

        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, Some(403));
        assert_eq!(parsed.error.reason(), Some("quotaExceeded"));
    }
}
