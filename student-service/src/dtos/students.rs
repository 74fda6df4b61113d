use crate::models::{NewStudent, Student};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Body of `POST /students/`.
///
/// Any `id`/`_id` sent by the client is not part of the schema and is
/// dropped along with other unknown fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Minh Than",
    "email": "thanvm2000@gmail.com",
    "course": "Experiments, Science, and Fashion in Nanophotonics",
    "gpa": 3.2
}))]
pub struct CreateStudentRequest {
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    pub course: String,
    pub gpa: f64,
}

/// The domain must have at least one dot; `user@localhost` is not a
/// deliverable address. Shape errors are left to the `email` rule.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.contains('.') => {
            let mut err = ValidationError::new("email_domain");
            err.message = Some("Email domain must contain a period".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Lowercases the domain part; the local part is case-sensitive and kept.
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            name: req.name,
            email: normalize_email(&req.email),
            course: req.course,
            gpa: req.gpa,
        }
    }
}

/// A single student record as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    #[schema(example = "66f1c2a4e13823a1b0d6f9a1")]
    pub id: String,
    #[schema(example = "Minh Than")]
    pub name: String,
    #[schema(example = "thanvm2000@gmail.com")]
    pub email: String,
    #[schema(example = "Experiments, Science, and Fashion in Nanophotonics")]
    pub course: String,
    #[schema(example = 3.2)]
    pub gpa: f64,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id_string().unwrap_or_default(),
            name: student.name,
            email: student.email,
            course: student.course,
            gpa: student.gpa,
        }
    }
}

/// Wrapper for `GET /students`. Lists are never returned as a top-level JSON
/// array, which older browsers allowed to be hijacked cross-origin.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentCollection {
    pub students: Vec<StudentResponse>,
}

impl From<Vec<Student>> for StudentCollection {
    fn from(students: Vec<Student>) -> Self {
        Self {
            students: students.into_iter().map(StudentResponse::from).collect(),
        }
    }
}

/// Shape of every error body rendered by `AppError`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Validation error")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "email: Invalid email format")]
    pub details: Option<String>,
}
