pub mod csv;
pub mod link;
