// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, ReportCause, SwipeAction};
pub use requests::{Credentials, Message, Position, ProfileUpdate, Report};
pub use responses::ApiErrorBody;
