use std::{fmt, str::FromStr, sync::LazyLock};

use clap::ValueEnum;
use regex::Regex;

/// Separator between the action identifier and the field in a catalog key.
pub const FIELD_SEPARATOR: char = '!';

/// Two or more dot-separated segments, e.g. `com.deepin.daemon.accounts.enable-auto-login`.
static ACTION_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*(\.[A-Za-z0-9][A-Za-z0-9_-]*)+$")
        .expect("action id pattern is valid")
});

/// Which localized string of an action an entry carries.
///
/// PolicyKit shows the `message` in the authentication prompt and uses the
/// `description` as the human-readable action label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Field {
    Message,
    Description,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Message => "message",
            Field::Description => "description",
        }
    }

    /// The other half of the message/description pair.
    pub fn counterpart(&self) -> Field {
        match self {
            Field::Message => Field::Description,
            Field::Description => Field::Message,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a `filename` attribute is not a valid catalog key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("missing '!' separator")]
    MissingSeparator,
    #[error("unknown field '{0}', expected 'message' or 'description'")]
    UnknownField(String),
    #[error("invalid action identifier '{0}'")]
    InvalidActionId(String),
}

/// A parsed catalog key: `<namespace>.<action>!<field>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub action_id: String,
    pub field: Field,
}

impl MessageKey {
    pub fn new(action_id: impl Into<String>, field: Field) -> Self {
        Self {
            action_id: action_id.into(),
            field,
        }
    }

    /// Everything before the last `.` of the action id.
    pub fn namespace(&self) -> &str {
        self.action_id
            .rsplit_once('.')
            .map(|(namespace, _)| namespace)
            .unwrap_or(&self.action_id)
    }

    /// The last segment of the action id.
    pub fn action(&self) -> &str {
        self.action_id
            .rsplit_once('.')
            .map(|(_, action)| action)
            .unwrap_or(&self.action_id)
    }
}

impl FromStr for MessageKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action_id, field) = s
            .rsplit_once(FIELD_SEPARATOR)
            .ok_or(KeyError::MissingSeparator)?;

        let field = match field {
            "message" => Field::Message,
            "description" => Field::Description,
            other => return Err(KeyError::UnknownField(other.to_string())),
        };

        if !is_valid_action_id(action_id) {
            return Err(KeyError::InvalidActionId(action_id.to_string()));
        }

        Ok(Self::new(action_id, field))
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.action_id, FIELD_SEPARATOR, self.field)
    }
}

pub fn is_valid_action_id(action_id: &str) -> bool {
    ACTION_ID_RE.is_match(action_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_key() {
        let key: MessageKey = "com.deepin.daemon.accounts.enable-auto-login!message"
            .parse()
            .unwrap();
        assert_eq!(key.action_id, "com.deepin.daemon.accounts.enable-auto-login");
        assert_eq!(key.field, Field::Message);
        assert_eq!(key.namespace(), "com.deepin.daemon.accounts");
        assert_eq!(key.action(), "enable-auto-login");
    }

    #[test]
    fn test_parse_description_key() {
        let key: MessageKey = "org.example.run!description".parse().unwrap();
        assert_eq!(key.field, Field::Description);
        assert_eq!(key.to_string(), "org.example.run!description");
    }

    #[test]
    fn test_parse_key_without_separator() {
        let err = "org.example.run".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, KeyError::MissingSeparator);
    }

    #[test]
    fn test_parse_key_unknown_field() {
        let err = "org.example.run!title".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, KeyError::UnknownField("title".to_string()));
    }

    #[test]
    fn test_parse_key_invalid_action_id() {
        // A single segment has no namespace
        let err = "run!message".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, KeyError::InvalidActionId("run".to_string()));

        assert!("org..run!message".parse::<MessageKey>().is_err());
        assert!("org.example.run now!message".parse::<MessageKey>().is_err());
        assert!("!message".parse::<MessageKey>().is_err());
    }

    #[test]
    fn test_field_counterpart() {
        assert_eq!(Field::Message.counterpart(), Field::Description);
        assert_eq!(Field::Description.counterpart(), Field::Message);
    }

    #[test]
    fn test_is_valid_action_id() {
        assert!(is_valid_action_id("org.freedesktop.login1.reboot"));
        assert!(is_valid_action_id("com.deepin.daemon.accounts.set_keyboard-layout"));
        assert!(!is_valid_action_id("org"));
        assert!(!is_valid_action_id(".org.example"));
        assert!(!is_valid_action_id("org.example."));
        assert!(!is_valid_action_id("org.-example"));
    }
}
