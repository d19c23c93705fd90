pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod syllabus;

pub use metrics::{get_metrics, init_metrics};
pub use prompt::build_prompt;
pub use syllabus::generate_syllabus;
