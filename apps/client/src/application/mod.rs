pub mod enquiry;
pub mod like_review;
pub mod list_reviews;
pub mod shared;
pub mod submit_reply;
pub mod submit_review;
