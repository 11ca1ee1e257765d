pub mod domain;
pub mod mapping;

pub use domain::customer::{Address, Customer, CustomerError, CustomerType};
