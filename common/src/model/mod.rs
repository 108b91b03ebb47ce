pub mod form;
pub mod history;
pub mod product;
pub mod reply;
