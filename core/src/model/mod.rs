pub mod bins;
pub mod daily_log;
pub mod entry;
