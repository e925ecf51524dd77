//! Lesson content as served by the lessons API.

use serde::{Deserialize, Serialize};

/// A single lesson. `topic` is the key shared by a target-language lesson
/// and its known-language counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub topic: String,
    #[serde(default)]
    pub explanation: String,
    /// Source code, possibly with escaped `\n` / `\t` sequences
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub exercise: String,
}

impl Lesson {
    pub fn new(
        topic: impl Into<String>,
        explanation: impl Into<String>,
        example: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            explanation: explanation.into(),
            example: example.into(),
            exercise: exercise.into(),
        }
    }

    /// The example with literal escape sequences turned into real whitespace.
    pub fn display_example(&self) -> String {
        unescape_code(&self.example)
    }
}

/// Replace literal `\n` and `\t` sequences with newline and tab.
pub fn unescape_code(code: &str) -> String {
    code.replace("\\n", "\n").replace("\\t", "\t")
}

/// Which of the two server-side lesson collections to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonDirection {
    /// Lessons in the language the learner already knows
    Known,
    /// Lessons in the language being learned
    Target,
}

impl LessonDirection {
    /// API path for this collection.
    pub fn path(&self) -> &'static str {
        match self {
            LessonDirection::Known => "/get-lessons-known",
            LessonDirection::Target => "/get-lessons-target",
        }
    }
}

impl std::fmt::Display for LessonDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonDirection::Known => write!(f, "known"),
            LessonDirection::Target => write!(f, "target"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_example_unescapes() {
        let lesson = Lesson::new("loops", "", r"for i in 0..3 {\n\tprintln!();\n}", "");
        assert_eq!(lesson.display_example(), "for i in 0..3 {\n\tprintln!();\n}");
    }

    #[test]
    fn test_display_example_keeps_real_newlines() {
        let lesson = Lesson::new("loops", "", "a\nb", "");
        assert_eq!(lesson.display_example(), "a\nb");
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let lesson: Lesson = serde_json::from_str(r#"{"topic":"loops"}"#).unwrap();
        assert_eq!(lesson.topic, "loops");
        assert!(lesson.example.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let lesson: Lesson = serde_json::from_str(
            r#"{"topic":"vars","explanation":"e","example":"x","exercise":"y","id":7,"language":"Rust"}"#,
        )
        .unwrap();
        assert_eq!(lesson, Lesson::new("vars", "e", "x", "y"));
    }

    #[test]
    fn test_direction_paths() {
        assert_eq!(LessonDirection::Known.path(), "/get-lessons-known");
        assert_eq!(LessonDirection::Target.path(), "/get-lessons-target");
    }
}
