pub mod upload_top_sheet;
