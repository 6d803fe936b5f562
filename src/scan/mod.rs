mod line_ending;

pub use line_ending::{detect_line_ending, LineEnding};
