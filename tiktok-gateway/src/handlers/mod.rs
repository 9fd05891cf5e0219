//! Route handlers for the `/api` surface
//!
//! Each handler answers 200 with a JSON body or, on the first failed client
//! call, returns the classified error without doing any further work.

pub mod audio;
pub mod tags;
pub mod trending;
pub mod users;
pub mod videos;

pub use audio::{get_audio_info, get_audio_top_videos};
pub use tags::{get_tag_info, get_tag_top_videos};
pub use trending::{get_trending_paged, get_trending_single_shot};
pub use users::{get_liked_videos, get_recent_videos, get_user_info};
pub use videos::get_video_info;
