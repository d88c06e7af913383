mod newsletter;
mod user_email;
mod user_name;
mod video_data;
mod video_duration;
mod video_id;

pub use newsletter::Newsletter;
pub use user_email::UserEmail;
pub use user_name::UserName;
pub use video_data::{Caption, VideoData};
pub use video_duration::VideoDuration;
pub use video_id::VideoId;
