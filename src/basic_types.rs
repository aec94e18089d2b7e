pub type UpdateId = i64;
pub type UserId = i64;
pub type ChatIntId = i64;
pub type MessageId = i32;

// Unix time, as sent by the API.
pub type Date = u64;
