// Entity Models
//
// - Shoe: mutable object with a derived description
// - Employee: value record with field-wise equality

pub mod shoe;
pub mod employee;

pub use shoe::Shoe;
pub use employee::Employee;
