//! Client-side behavior layer for the portfolio site: the reviews widget
//! (submission, moderated listing, likes, replies, realtime sync) and the
//! enquiry form relay, with every hosted service and the page surface
//! behind injected ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
