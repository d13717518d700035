//! Release packaging: build matrix, artifact staging and upload to the
//! release that triggered the CI run.

pub mod error;
pub mod event;
pub mod github;
pub mod publish;
pub mod stage;
pub mod target;
pub mod workflow;

pub use event::ReleaseEvent;
pub use github::GitHubClient;
pub use publish::publish_artifact;
pub use stage::stage_artifact;
pub use target::BuildTarget;
pub use workflow::verify_workflow;
