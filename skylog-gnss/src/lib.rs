pub mod constellation;
pub mod filter;
pub mod observation;
pub mod report;
