pub mod students;

pub use students::{CreateStudentRequest, ErrorResponse, StudentCollection, StudentResponse};
