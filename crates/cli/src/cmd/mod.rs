pub mod doctor;
pub mod output;
pub mod register;
pub mod validate;
