pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

pub use crate::core::engine::Engine;
pub use crate::domain::factory::{CourseFactory, UserDispatch};
pub use crate::domain::model::{
    Category, Course, CourseKind, EnrollmentObserver, Student, Tutor, User, UserKind,
};
pub use crate::storage::{MapperRegistry, StudentMapper};
pub use crate::utils::error::{EngineError, Result};
pub use crate::utils::logger::Logger;
