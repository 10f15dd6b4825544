mod course_registry;
mod course_viewer;

pub use course_registry::{global, CourseRegistry};
pub use course_viewer::CourseViewer;

pub const INITIAL_COURSE_NAME: &str = "Programación App Móvil";
pub const FIRST_ACCESS_BANNER: &str = "[SE INVOCA LA CLASE SOLO LA PRIMERA VEZ]";
pub const VIEWER_BANNER: &str = "[MÉTODO INICIAL]";
