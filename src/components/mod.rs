pub mod reviews_table;
