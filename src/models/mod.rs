//! Data models shared by the API client, the session store and the app.

mod lesson;
mod session;

pub use lesson::{unescape_code, Lesson, LessonDirection};
pub use session::{LanguagePair, Session};

/// Available language names, in server order.
pub type Catalog = Vec<String>;
