use crate::domain::model::{Category, Course, CourseKind, Student, Tutor, User, UserKind};
use crate::utils::error::{EngineError, Result};

fn new_tutor(name: &str) -> User {
    User::Tutor(Tutor::new(name))
}

fn new_student(name: &str) -> User {
    User::Student(Student::new(name))
}

/// Static role registry resolving a kind string to a concrete constructor.
/// The table is built once per dispatcher; re-registering a role is a no-op.
pub struct UserDispatch {
    factories: Vec<(UserKind, fn(&str) -> User)>,
}

impl UserDispatch {
    pub fn new() -> Self {
        let mut dispatch = Self {
            factories: Vec::new(),
        };
        for kind in UserKind::ALL {
            let factory = match kind {
                UserKind::Tutor => new_tutor as fn(&str) -> User,
                UserKind::Student => new_student,
            };
            dispatch.register(kind, factory);
        }
        dispatch
    }

    fn register(&mut self, kind: UserKind, factory: fn(&str) -> User) {
        if self.factories.iter().any(|(k, _)| *k == kind) {
            return;
        }
        self.factories.push((kind, factory));
    }

    pub fn registered_kinds(&self) -> Vec<UserKind> {
        self.factories.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn create(&self, kind: &str, name: &str) -> Result<User> {
        let kind = UserKind::parse(kind)?;
        let (_, factory) = self
            .factories
            .iter()
            .find(|(k, _)| *k == kind)
            .ok_or_else(|| EngineError::UnknownKind {
                kind: kind.as_str().to_string(),
            })?;
        Ok(factory(name))
    }
}

impl Default for UserDispatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Prototype-based course construction: one canonical template per kind,
/// built once and cloned for each new course.
pub struct CourseFactory {
    interactive_proto: Course,
    recorded_proto: Course,
}

impl CourseFactory {
    pub fn new() -> Self {
        Self {
            interactive_proto: Course::new_template(CourseKind::Interactive, "base_of_python"),
            recorded_proto: Course::new_template(CourseKind::Recorded, "english for programmers"),
        }
    }

    pub fn create(&self, kind: &str, name: &str, category: &Category) -> Result<Course> {
        let template = match CourseKind::parse(kind)? {
            CourseKind::Interactive => &self.interactive_proto,
            CourseKind::Recorded => &self.recorded_proto,
        };
        Ok(template.clone_with(name, category))
    }
}

impl Default for CourseFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EngineError;

    fn category() -> Category {
        Category::new(0, "python", None)
    }

    #[test]
    fn dispatch_creates_the_matching_variant() {
        let dispatch = UserDispatch::new();

        let tutor = dispatch.create("tutor", "Marge").unwrap();
        assert_eq!(tutor.kind(), UserKind::Tutor);
        assert_eq!(tutor.name(), "Marge");

        let student = dispatch.create("STUDENT", "Ann").unwrap();
        assert_eq!(student.kind(), UserKind::Student);
        assert_eq!(student.name(), "Ann");
    }

    #[test]
    fn dispatch_rejects_unknown_roles() {
        let dispatch = UserDispatch::new();
        let err = dispatch.create("admin", "Eve").unwrap_err();
        assert!(matches!(err, EngineError::UnknownKind { .. }));
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn dispatch_registers_each_role_exactly_once() {
        let first = UserDispatch::new();
        let second = UserDispatch::new();

        assert_eq!(first.registered_kinds(), UserKind::ALL.to_vec());
        assert_eq!(second.registered_kinds(), UserKind::ALL.to_vec());
    }

    #[test]
    fn clones_have_independent_student_lists() {
        let factory = CourseFactory::new();
        let category = category();

        let a = factory.create("interactive", "A", &category).unwrap();
        let b = factory.create("interactive", "B", &category).unwrap();

        a.add_student(&Student::new("Ann"));

        assert_eq!(a.students().len(), 1);
        assert!(b.students().is_empty());
    }

    #[test]
    fn cloning_never_mutates_the_template() {
        let factory = CourseFactory::new();
        let category = category();

        let english = factory.create("recorded", "English", &category).unwrap();
        english.add_student(&Student::new("Ann"));

        let again = factory.create("recorded", "English II", &category).unwrap();
        assert!(again.students().is_empty());
        assert_eq!(again.name(), "English II");
        assert_eq!(again.kind(), CourseKind::Recorded);
    }

    #[test]
    fn unknown_course_kind_is_rejected() {
        let factory = CourseFactory::new();
        let err = factory.create("hybrid", "X", &category()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownKind { .. }));
        assert!(err.to_string().contains("hybrid"));
    }
}
