use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A verb is mastered once it has been studied this many times.
pub const MASTERY_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbId(pub u32);

impl fmt::Display for VerbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One irregular verb flashcard as served by the verbs endpoint.
///
/// The endpoint also sends an `isMastered` flag. It is ignored on purpose:
/// mastery is always derived from `studied_count` via [`Verb::is_mastered`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    pub id: VerbId,
    pub infinitive: String,
    pub past_simple: String,
    pub past_participle: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub studied_count: u32,
}

impl Verb {
    pub fn is_studied(&self) -> bool {
        self.studied_count > 0
    }

    pub fn is_mastered(&self) -> bool {
        self.studied_count >= MASTERY_THRESHOLD
    }
}

#[cfg(test)]
pub(crate) fn test_verb(id: u32, infinitive: &str, translation: &str, studied_count: u32) -> Verb {
    Verb {
        id: VerbId(id),
        infinitive: infinitive.to_string(),
        past_simple: format!("{infinitive}-ps"),
        past_participle: format!("{infinitive}-pp"),
        translation: translation.to_string(),
        image_url: None,
        studied_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_shape() {
        let json = r#"{
            "id": 7,
            "infinitive": "go",
            "pastSimple": "went",
            "pastParticiple": "gone",
            "translation": "идти",
            "imageUrl": null,
            "studiedCount": 2,
            "isMastered": true
        }"#;

        let verb: Verb = serde_json::from_str(json).unwrap();
        assert_eq!(verb.id, VerbId(7));
        assert_eq!(verb.past_simple, "went");
        assert_eq!(verb.past_participle, "gone");
        assert_eq!(verb.image_url, None);
        assert_eq!(verb.studied_count, 2);
        // The server flag says mastered, the derived rule does not
        assert!(!verb.is_mastered());
    }

    #[test]
    fn test_mastery_boundary() {
        assert!(!test_verb(1, "go", "", 2).is_mastered());
        assert!(test_verb(1, "go", "", 3).is_mastered());
        assert!(!test_verb(1, "go", "", 0).is_studied());
        assert!(test_verb(1, "go", "", 1).is_studied());
    }
}
