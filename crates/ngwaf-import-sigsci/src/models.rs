//! Dashboard API response bodies
//!
//! Only the fields needed to identify and classify an object are modelled;
//! everything else in the payload is ignored.

use serde::Deserialize;

/// Envelope shared by every listing endpoint
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
    #[serde(default, rename = "totalCount")]
    pub total_count: Option<u64>,
}

/// Corp or site rule
#[derive(Debug, Clone, Deserialize)]
pub struct RuleBody {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: String,
}

/// Corp or site list
#[derive(Debug, Clone, Deserialize)]
pub struct ListBody {
    pub id: String,
}

/// Corp or site signal tag; the tag name doubles as its id
#[derive(Debug, Clone, Deserialize)]
pub struct SignalTagBody {
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteBody {
    /// Short name, used as the site's id everywhere
    pub name: String,
}

/// Legacy templated rule (`configuredtemplates`)
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatedRuleBody {
    pub name: String,
    #[serde(default)]
    pub detections: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationBody {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertBody {
    pub id: String,
    #[serde(default)]
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_listing_ignores_unknown_fields() {
        let body = r#"{
            "totalCount": 1,
            "data": [{
                "id": "64de89736993ba01d4fc06ba",
                "type": "request",
                "enabled": true,
                "groupOperator": "all",
                "conditions": [],
                "actions": [{"type": "block"}]
            }]
        }"#;
        let parsed: DataResponse<RuleBody> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total_count, Some(1));
        assert_eq!(parsed.data[0].id, "64de89736993ba01d4fc06ba");
        assert_eq!(parsed.data[0].rule_type, "request");
    }

    #[test]
    fn test_templated_rule_defaults_to_no_detections() {
        let parsed: DataResponse<TemplatedRuleBody> =
            serde_json::from_str(r#"{"data": [{"name": "LOGINATTEMPT"}]}"#).unwrap();
        assert!(parsed.data[0].detections.is_empty());
        assert_eq!(parsed.total_count, None);
    }

    #[test]
    fn test_signal_tag_uses_tag_name() {
        let parsed: DataResponse<SignalTagBody> = serde_json::from_str(
            r#"{"data": [{"tagName": "corp.bots", "longName": "Bots", "configurable": true}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.data[0].tag_name, "corp.bots");
    }
}
