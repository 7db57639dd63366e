//! Mock LinkedIn integration. Returns a fixed profile after a simulated delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl LinkedInProfile {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            name: None,
            headline: None,
            skills: None,
        }
    }
}

/// Simulates the OAuth round trip and returns the demo profile.
pub async fn connect(delay: Duration) -> LinkedInProfile {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    LinkedInProfile {
        connected: true,
        name: Some("Alex Johnson".to_string()),
        headline: Some("Software Engineer at Tech Company".to_string()),
        skills: Some(
            ["JavaScript", "React", "Node.js", "Problem Solving"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_returns_connected_profile() {
        let profile = connect(Duration::ZERO).await;
        assert!(profile.connected);
        assert_eq!(profile.name.as_deref(), Some("Alex Johnson"));
        assert_eq!(profile.skills.as_ref().map(Vec::len), Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_waits_for_delay() {
        let started = tokio::time::Instant::now();
        connect(Duration::from_millis(1200)).await;
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }

    #[test]
    fn test_disconnected_serializes_without_optional_fields() {
        let json = serde_json::to_value(LinkedInProfile::disconnected()).unwrap();
        assert_eq!(json, serde_json::json!({ "connected": false }));
    }
}
