pub mod captcha;
pub mod notify;
pub mod persistence;
pub mod realtime;
pub mod storage;
