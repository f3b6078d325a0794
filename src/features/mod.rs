pub mod fec;
pub mod results;
