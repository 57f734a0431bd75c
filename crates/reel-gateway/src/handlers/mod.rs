mod health;
mod testing;
mod video;

pub use health::health_handler;
pub use testing::clear_all_handler;
pub use video::{
    create_video_handler, delete_video_handler, get_video_handler, list_videos_handler,
    update_video_handler,
};
