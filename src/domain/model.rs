use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::utils::error::{EngineError, Result};

/// Role discriminator selecting which concrete user variant to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Tutor,
    Student,
}

impl UserKind {
    pub const ALL: [UserKind; 2] = [UserKind::Tutor, UserKind::Student];

    /// Case-insensitive match over the static role set.
    pub fn parse(kind: &str) -> Result<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "tutor" => Ok(UserKind::Tutor),
            "student" => Ok(UserKind::Student),
            _ => Err(EngineError::UnknownKind {
                kind: kind.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserKind::Tutor => "tutor",
            UserKind::Student => "student",
        }
    }
}

/// Delivery-mode discriminator for courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseKind {
    Interactive,
    Recorded,
}

impl CourseKind {
    pub fn parse(kind: &str) -> Result<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "interactive" => Ok(CourseKind::Interactive),
            "recorded" => Ok(CourseKind::Recorded),
            _ => Err(EngineError::UnknownKind {
                kind: kind.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseKind::Interactive => "interactive",
            CourseKind::Recorded => "recorded",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tutor {
    name: String,
}

impl Tutor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
struct StudentData {
    id: Option<i64>,
    name: String,
    courses: Vec<Weak<RefCell<CourseData>>>,
}

/// Shared handle to a student. Clones point at the same underlying entity;
/// the engine holds the canonical copy.
#[derive(Clone)]
pub struct Student {
    inner: Rc<RefCell<StudentData>>,
}

impl Student {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StudentData {
                id: None,
                name: name.to_string(),
                courses: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn set_name(&self, name: &str) {
        self.inner.borrow_mut().name = name.to_string();
    }

    /// Storage-assigned key, absent until a successful insert is explicitly
    /// written back.
    pub fn id(&self) -> Option<i64> {
        self.inner.borrow().id
    }

    pub fn set_id(&self, id: i64) {
        self.inner.borrow_mut().id = Some(id);
    }

    /// Enrolled courses, in enrollment order.
    pub fn courses(&self) -> Vec<Course> {
        self.inner
            .borrow()
            .courses
            .iter()
            .filter_map(Weak::upgrade)
            .map(|inner| Course { inner })
            .collect()
    }
}

impl fmt::Debug for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Student")
            .field("id", &data.id)
            .field("name", &data.name)
            .finish()
    }
}

#[derive(Debug)]
pub enum User {
    Tutor(Tutor),
    Student(Student),
}

impl User {
    pub fn kind(&self) -> UserKind {
        match self {
            User::Tutor(_) => UserKind::Tutor,
            User::Student(_) => UserKind::Student,
        }
    }

    pub fn name(&self) -> String {
        match self {
            User::Tutor(tutor) => tutor.name().to_string(),
            User::Student(student) => student.name(),
        }
    }
}

/// Hook invoked synchronously after both sides of an enrollment are updated.
/// Subscription management beyond this call is up to the subscriber.
pub trait EnrollmentObserver {
    fn on_student_added(&self, course: &Course, student: &Student);
}

struct CourseData {
    kind: CourseKind,
    name: String,
    category: Weak<RefCell<CategoryData>>,
    students: Vec<Student>,
    observers: Vec<Rc<dyn EnrollmentObserver>>,
}

/// Shared handle to a course. The two kinds are structurally identical and
/// differ only in which prototype template produced them.
#[derive(Clone)]
pub struct Course {
    inner: Rc<RefCell<CourseData>>,
}

impl Course {
    /// Builds a canonical prototype. Templates carry no category; the clone
    /// operation supplies one.
    pub(crate) fn new_template(kind: CourseKind, name: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CourseData {
                kind,
                name: name.to_string(),
                category: Weak::new(),
                students: Vec::new(),
                observers: Vec::new(),
            })),
        }
    }

    /// Explicit prototype clone: fresh student and observer lists, and the
    /// template's own category reference is never carried over. The template
    /// itself is left untouched.
    pub(crate) fn clone_with(&self, name: &str, category: &Category) -> Course {
        let kind = self.inner.borrow().kind;
        Course {
            inner: Rc::new(RefCell::new(CourseData {
                kind,
                name: name.to_string(),
                category: Rc::downgrade(&category.inner),
                students: Vec::new(),
                observers: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn kind(&self) -> CourseKind {
        self.inner.borrow().kind
    }

    pub fn category(&self) -> Option<Category> {
        self.inner
            .borrow()
            .category
            .upgrade()
            .map(|inner| Category { inner })
    }

    pub fn students(&self) -> Vec<Student> {
        self.inner.borrow().students.clone()
    }

    pub fn student_at(&self, index: usize) -> Option<Student> {
        self.inner.borrow().students.get(index).cloned()
    }

    pub fn subscribe(&self, observer: Rc<dyn EnrollmentObserver>) {
        self.inner.borrow_mut().observers.push(observer);
    }

    /// Enrolls a student: the student lands on the course roster and the
    /// course on the student's list before any observer fires. Observers are
    /// notified exactly once, synchronously.
    pub fn add_student(&self, student: &Student) {
        self.inner.borrow_mut().students.push(student.clone());
        student
            .inner
            .borrow_mut()
            .courses
            .push(Rc::downgrade(&self.inner));

        let observers: Vec<Rc<dyn EnrollmentObserver>> = self.inner.borrow().observers.clone();
        for observer in observers {
            observer.on_student_added(self, student);
        }
    }
}

impl fmt::Debug for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Course")
            .field("kind", &data.kind)
            .field("name", &data.name)
            .field("students", &data.students.len())
            .finish()
    }
}

struct CategoryData {
    id: u64,
    name: String,
    parent: Option<Category>,
    courses: Vec<Course>,
}

/// Shared handle to a category node. Parent chains must stay acyclic; that
/// is the caller's responsibility.
#[derive(Clone)]
pub struct Category {
    inner: Rc<RefCell<CategoryData>>,
}

impl Category {
    pub(crate) fn new(id: u64, name: &str, parent: Option<Category>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CategoryData {
                id,
                name: name.to_string(),
                parent,
                courses: Vec::new(),
            })),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.borrow().id
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn parent(&self) -> Option<Category> {
        self.inner.borrow().parent.clone()
    }

    pub(crate) fn add_course(&self, course: &Course) {
        self.inner.borrow_mut().courses.push(course.clone());
    }

    /// Directly owned courses plus everything counted along the parent
    /// chain, recursively.
    pub fn course_count(&self) -> usize {
        let data = self.inner.borrow();
        let mut count = data.courses.len();
        if let Some(parent) = &data.parent {
            count += parent.course_count();
        }
        count
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Category")
            .field("id", &data.id)
            .field("name", &data.name)
            .field("courses", &data.courses.len())
            .finish()
    }
}
