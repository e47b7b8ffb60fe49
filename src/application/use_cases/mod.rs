mod answer_question;
mod fetch_apod;

pub use answer_question::*;
pub use fetch_apod::*;
