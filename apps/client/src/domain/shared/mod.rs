pub mod moderation;
pub mod optimistic;
