use std::collections::HashMap;

use crate::domain::factory::{CourseFactory, UserDispatch};
use crate::domain::model::{Category, Course, Student, Tutor, User};
use crate::utils::error::{EngineError, Result};
use crate::utils::logger::Logger;

/// Aggregate registry owning every in-memory entity. Creation goes through
/// here so the derived per-category course counts stay consistent with the
/// collections.
pub struct Engine {
    logger: Logger,
    user_dispatch: UserDispatch,
    course_factory: CourseFactory,
    tutors: Vec<Tutor>,
    students: Vec<Student>,
    courses: Vec<Course>,
    categories: Vec<Category>,
    category_counts: HashMap<u64, usize>,
    next_category_id: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_logger(Logger::new("engine"))
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self {
            logger,
            user_dispatch: UserDispatch::new(),
            course_factory: CourseFactory::new(),
            tutors: Vec::new(),
            students: Vec::new(),
            courses: Vec::new(),
            categories: Vec::new(),
            category_counts: HashMap::new(),
            next_category_id: 0,
        }
    }

    /// Creates a user of the given role and files it in the matching
    /// collection.
    pub fn create_user(&mut self, kind: &str, name: &str) -> Result<User> {
        let user = self.user_dispatch.create(kind, name)?;
        match &user {
            User::Tutor(tutor) => self.tutors.push(tutor.clone()),
            User::Student(student) => self.students.push(student.clone()),
        }
        self.logger
            .log(&format!("created {} {name}", user.kind().as_str()));
        Ok(user)
    }

    /// Allocates the next sequential category id and registers the new node
    /// with a zero derived count.
    pub fn create_category(&mut self, name: &str, parent: Option<&Category>) -> Category {
        let category = Category::new(self.next_category_id, name, parent.cloned());
        self.next_category_id += 1;
        self.category_counts.insert(category.id(), 0);
        self.categories.push(category.clone());
        self.logger
            .log(&format!("created category {name} (id {})", category.id()));
        category
    }

    pub fn find_category_by_id(&self, id: u64) -> Result<Category> {
        self.categories
            .iter()
            .find(|category| category.id() == id)
            .cloned()
            .ok_or(EngineError::CategoryNotFound { id })
    }

    /// Clones the matching prototype, files the course, and bumps the
    /// owning category's derived count. A category built elsewhere becomes
    /// part of this registry the first time a course lands in it.
    pub fn create_course(&mut self, kind: &str, name: &str, category: &Category) -> Result<Course> {
        let course = self.course_factory.create(kind, name, category)?;
        self.courses.push(course.clone());

        if !self.categories.iter().any(|c| c.id() == category.id()) {
            self.categories.push(category.clone());
            // keep future ids unique even after adopting a foreign category
            self.next_category_id = self.next_category_id.max(category.id() + 1);
        }
        category.add_course(&course);
        *self.category_counts.entry(category.id()).or_insert(0) += 1;

        self.logger.log(&format!(
            "created {kind} course {name} in {}",
            category.name()
        ));
        Ok(course)
    }

    /// First course matching the name.
    pub fn get_course(&self, name: &str) -> Result<Course> {
        self.courses
            .iter()
            .find(|course| course.name() == name)
            .cloned()
            .ok_or_else(|| EngineError::CourseNotFound {
                name: name.to_string(),
            })
    }

    /// Stored derived count for the category, independent of its parent
    /// chain.
    pub fn course_count(&self, category: &Category) -> Result<usize> {
        self.category_counts
            .get(&category.id())
            .copied()
            .ok_or_else(|| EngineError::UnknownCategory {
                name: category.name(),
            })
    }

    pub fn tutors(&self) -> &[Tutor] {
        &self.tutors
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
