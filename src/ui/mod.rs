//! Line-oriented terminal output: board rendering, prompts and result
//! announcements.

pub mod console;
