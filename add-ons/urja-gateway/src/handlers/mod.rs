mod chat;

pub(crate) use chat::{chat, weekly_tip};
