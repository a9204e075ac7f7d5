//! Pipeline domain types

use serde::{Deserialize, Deserializer, Serialize};

/// Pipeline as reported by the ATC
///
/// Names are unique within a listing. Groups keep the order the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groups: Vec<GroupConfig>,
}

/// Named subset of a pipeline's jobs and resources, used for display grouping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jobs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<String>,
}

// The server encodes empty slices as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Pipeline {
        Pipeline {
            name: "mypipeline".to_string(),
            paused: true,
            groups: vec![GroupConfig {
                name: "group1".to_string(),
                jobs: vec!["job1".to_string(), "job2".to_string()],
                resources: vec!["resource1".to_string(), "resource2".to_string()],
            }],
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "mypipeline",
                "paused": true,
                "groups": [{
                    "name": "group1",
                    "jobs": ["job1", "job2"],
                    "resources": ["resource1", "resource2"]
                }]
            })
        );
    }

    #[test]
    fn test_null_and_missing_sequences_decode_empty() {
        let pipeline: Pipeline = serde_json::from_value(json!({
            "name": "bare",
            "groups": [{ "name": "g", "jobs": null }]
        }))
        .unwrap();

        assert!(!pipeline.paused);
        assert_eq!(pipeline.groups.len(), 1);
        assert!(pipeline.groups[0].jobs.is_empty());
        assert!(pipeline.groups[0].resources.is_empty());

        let pipeline: Pipeline =
            serde_json::from_value(json!({ "name": "bare", "groups": null })).unwrap();
        assert!(pipeline.groups.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let pipeline: Pipeline = serde_json::from_value(json!({
            "name": "mypipeline",
            "paused": false,
            "url": "/pipelines/mypipeline"
        }))
        .unwrap();
        assert_eq!(pipeline.name, "mypipeline");
    }
}
