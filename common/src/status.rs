use serde::{Deserialize, Serialize};

/// The view's three-value status flag.
///
/// Monotonic within a single click cycle (`ready -> incoming -> done`);
/// a new trigger after `done` starts a new cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ready,
    Incoming,
    Done,
}

impl Status {
    /// The lowercase display string shown on screen.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "ready",
            Status::Incoming => "incoming",
            Status::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings() {
        assert_eq!(Status::Ready.to_string(), "ready");
        assert_eq!(Status::Incoming.to_string(), "incoming");
        assert_eq!(Status::Done.to_string(), "done");
    }

    #[test]
    fn defaults_to_ready() {
        assert_eq!(Status::default(), Status::Ready);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Status::Incoming).unwrap(),
            "\"incoming\""
        );
    }
}
