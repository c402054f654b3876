use crate::model::daily_log::LogDocument;
use anyhow::Result;

pub trait LogRepository {
    fn load(&self) -> Result<LogDocument>;
}
