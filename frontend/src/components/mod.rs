pub mod history;
pub mod results;
pub mod upload;
