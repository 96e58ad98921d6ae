pub mod board;
pub mod doctor;
pub mod find;
pub mod output;
