mod placeholder;
use placeholder::Placeholder;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod learning_center;
pub use learning_center::LearningCenter;

mod qa_system;
pub use qa_system::QASystem;

mod tools;
pub use tools::Tools;

mod projects;
pub use projects::Projects;

mod profile;
pub use profile::Profile;
