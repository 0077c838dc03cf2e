pub mod analyze;
pub mod dispatch;
pub mod export;
pub mod history;
