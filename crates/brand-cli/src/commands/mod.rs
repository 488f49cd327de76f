pub mod analyze_name;
pub mod dispatch;
pub mod generate;
pub mod history;
pub mod options;
pub mod schema;
