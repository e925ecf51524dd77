//! In-memory lesson repository.
//!
//! Holds the two lesson collections of the current language pair and pairs
//! a target lesson with its known-language counterpart by topic.

use crate::models::{Lesson, LessonDirection};

/// Lessons for the current language pair, in server order.
#[derive(Debug, Default, Clone)]
pub struct LessonRepository {
    /// Lessons in the language being learned
    target: Vec<Lesson>,
    /// Reference lessons in the language already known
    known: Vec<Lesson>,
}

impl LessonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target collection wholesale.
    pub fn replace_target(&mut self, lessons: Vec<Lesson>) {
        tracing::debug!("Replacing target lessons ({} entries)", lessons.len());
        self.target = lessons;
    }

    /// Replace the known collection wholesale.
    pub fn replace_known(&mut self, lessons: Vec<Lesson>) {
        tracing::debug!("Replacing known lessons ({} entries)", lessons.len());
        self.known = lessons;
    }

    /// Replace whichever collection `direction` names.
    pub fn replace(&mut self, direction: LessonDirection, lessons: Vec<Lesson>) {
        match direction {
            LessonDirection::Target => self.replace_target(lessons),
            LessonDirection::Known => self.replace_known(lessons),
        }
    }

    pub fn target(&self) -> &[Lesson] {
        &self.target
    }

    pub fn known(&self) -> &[Lesson] {
        &self.known
    }

    /// First known lesson whose topic equals `topic` exactly.
    pub fn find_known_by_topic(&self, topic: &str) -> Option<&Lesson> {
        self.known.iter().find(|lesson| lesson.topic == topic)
    }

    /// Target lesson at `index`, if any.
    pub fn target_at(&self, index: usize) -> Option<&Lesson> {
        self.target.get(index)
    }

    /// Empty both collections.
    pub fn clear(&mut self) {
        self.target.clear();
        self.known.clear();
    }
}
