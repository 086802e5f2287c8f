/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event types the platform emits to webhook subscribers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebhookEventType {
    UserCreated,
    UserUpdated,
    UserDeleted,
    CourseCreated,
    CourseUpdated,
    CourseDeleted,
    QuizCompleted,
    FileUploaded,
    VoiceCommand,
    SystemAlert,
    IntegrationConnected,
    IntegrationDisconnected,
    /// Event names this SDK version does not know yet
    Other(String),
}

impl WebhookEventType {
    pub fn as_str(&self) -> &str {
        match self {
            WebhookEventType::UserCreated => "user.created",
            WebhookEventType::UserUpdated => "user.updated",
            WebhookEventType::UserDeleted => "user.deleted",
            WebhookEventType::CourseCreated => "course.created",
            WebhookEventType::CourseUpdated => "course.updated",
            WebhookEventType::CourseDeleted => "course.deleted",
            WebhookEventType::QuizCompleted => "quiz.completed",
            WebhookEventType::FileUploaded => "file.uploaded",
            WebhookEventType::VoiceCommand => "voice.command",
            WebhookEventType::SystemAlert => "system.alert",
            WebhookEventType::IntegrationConnected => "integration.connected",
            WebhookEventType::IntegrationDisconnected => "integration.disconnected",
            WebhookEventType::Other(name) => name,
        }
    }
}

impl From<&str> for WebhookEventType {
    fn from(value: &str) -> Self {
        match value {
            "user.created" => WebhookEventType::UserCreated,
            "user.updated" => WebhookEventType::UserUpdated,
            "user.deleted" => WebhookEventType::UserDeleted,
            "course.created" => WebhookEventType::CourseCreated,
            "course.updated" => WebhookEventType::CourseUpdated,
            "course.deleted" => WebhookEventType::CourseDeleted,
            "quiz.completed" => WebhookEventType::QuizCompleted,
            "file.uploaded" => WebhookEventType::FileUploaded,
            "voice.command" => WebhookEventType::VoiceCommand,
            "system.alert" => WebhookEventType::SystemAlert,
            "integration.connected" => WebhookEventType::IntegrationConnected,
            "integration.disconnected" => WebhookEventType::IntegrationDisconnected,
            other => WebhookEventType::Other(other.to_string()),
        }
    }
}

impl From<String> for WebhookEventType {
    fn from(value: String) -> Self {
        WebhookEventType::from(value.as_str())
    }
}

impl From<WebhookEventType> for String {
    fn from(value: WebhookEventType) -> Self {
        match value {
            WebhookEventType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user.created", WebhookEventType::UserCreated)]
    #[case("quiz.completed", WebhookEventType::QuizCompleted)]
    #[case("integration.disconnected", WebhookEventType::IntegrationDisconnected)]
    #[case("grade.posted", WebhookEventType::Other("grade.posted".to_string()))]
    fn test_event_type_from_str(#[case] raw: &str, #[case] expected: WebhookEventType) {
        assert_eq!(WebhookEventType::from(raw), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[test]
    fn test_event_type_serde() {
        let json = serde_json::to_string(&WebhookEventType::FileUploaded).unwrap();
        assert_eq!(json, r#""file.uploaded""#);

        let parsed: WebhookEventType = serde_json::from_str(r#""voice.command""#).unwrap();
        assert_eq!(parsed, WebhookEventType::VoiceCommand);
    }
}
