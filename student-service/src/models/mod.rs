pub mod student;

pub use student::{NewStudent, Student};
