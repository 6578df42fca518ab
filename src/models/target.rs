use serde::{Deserialize, Serialize};

/// Content kinds a like, comment, or hashtag can attach to.
///
/// A generic reference is the pair (kind, id). It is stored as plain
/// columns with no foreign key, so resolution is an explicit per-kind
/// lookup and rows may outlive their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
    Story,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Story => "story",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "post" => Some(Self::Post),
            "comment" => Some(Self::Comment),
            "story" => Some(Self::Story),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for kind in [TargetKind::Post, TargetKind::Comment, TargetKind::Story] {
            assert_eq!(TargetKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(TargetKind::from_str("video"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TargetKind::Post).unwrap();
        assert_eq!(json, "\"post\"");
        let kind: TargetKind = serde_json::from_str("\"story\"").unwrap();
        assert_eq!(kind, TargetKind::Story);
    }
}
