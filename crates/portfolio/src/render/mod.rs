pub mod link;
pub mod metrics;
mod page;
pub mod projects;
pub mod theme;
pub mod toggle;

pub use link::ContentLink;
pub use metrics::{GridColumns, MetricsBar, MetricsLayout};
pub use page::render_page;
pub use projects::{ProjectCard, ProjectList};
pub use toggle::{TrackSwitch, TrackToggle};
