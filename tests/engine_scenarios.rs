use learnhub::{Engine, EngineError, UserKind};

#[test]
fn users_land_in_their_collections_exactly_once() {
    let mut engine = Engine::new();

    let tutor = engine.create_user("tutor", "Marge").unwrap();
    let student = engine.create_user("STUDENT", "Ann").unwrap();

    assert_eq!(tutor.kind(), UserKind::Tutor);
    assert_eq!(tutor.name(), "Marge");
    assert_eq!(student.name(), "Ann");

    assert_eq!(engine.tutors().len(), 1);
    assert_eq!(engine.tutors()[0].name(), "Marge");
    assert_eq!(engine.students().len(), 1);
    assert_eq!(engine.students()[0].name(), "Ann");
}

#[test]
fn unknown_role_is_rejected_with_the_offending_kind() {
    let mut engine = Engine::new();
    let err = engine.create_user("admin", "Eve").unwrap_err();
    assert!(matches!(err, EngineError::UnknownKind { .. }));
    assert!(err.to_string().contains("admin"));
}

#[test]
fn courses_of_the_same_kind_have_independent_rosters() {
    let mut engine = Engine::new();
    let python = engine.create_category("Python", None);

    let a = engine.create_course("interactive", "A", &python).unwrap();
    let b = engine.create_course("interactive", "B", &python).unwrap();

    let user = engine.create_user("student", "Ann").unwrap();
    if let learnhub::User::Student(ann) = &user {
        a.add_student(ann);
    }

    assert_eq!(a.students().len(), 1);
    assert!(b.students().is_empty());
}

#[test]
fn derived_counts_follow_creations_per_category() {
    let mut engine = Engine::new();
    let python = engine.create_category("Python", None);
    let others = engine.create_category("Others", None);

    engine.create_course("interactive", "OOP", &python).unwrap();
    engine.create_course("recorded", "English", &others).unwrap();
    engine.create_course("interactive", "Web", &python).unwrap();

    assert_eq!(engine.course_count(&python).unwrap(), 2);
    assert_eq!(engine.course_count(&others).unwrap(), 1);
}

#[test]
fn category_ids_are_sequential_and_counts_flow_along_the_chain() {
    let mut engine = Engine::new();
    let python = engine.create_category("Python", None);
    let advanced = engine.create_category("Advanced", Some(&python));

    assert_eq!(python.id(), 0);
    assert_eq!(advanced.id(), 1);

    engine.create_course("interactive", "OOP", &python).unwrap();

    // The derived count tracks the owning category; the hierarchy count on
    // the chain member that points at the owner inherits it.
    assert_eq!(engine.course_count(&python).unwrap(), 1);
    assert_eq!(python.course_count(), 1);
    assert_eq!(advanced.course_count(), 1);
}

#[test]
fn hierarchy_count_sums_the_whole_parent_chain() {
    let mut engine = Engine::new();
    let root = engine.create_category("root", None);
    let mid = engine.create_category("mid", Some(&root));
    let leaf = engine.create_category("leaf", Some(&mid));

    engine.create_course("interactive", "A", &root).unwrap();
    engine.create_course("recorded", "B", &mid).unwrap();
    engine.create_course("interactive", "C", &leaf).unwrap();

    assert_eq!(root.course_count(), 1);
    assert_eq!(mid.course_count(), 2);
    assert_eq!(leaf.course_count(), 3);
}

#[test]
fn get_course_returns_the_first_match_by_name() {
    let mut engine = Engine::new();
    let python = engine.create_category("Python", None);
    engine.create_course("interactive", "OOP", &python).unwrap();
    engine.create_course("recorded", "OOP", &python).unwrap();

    let course = engine.get_course("OOP").unwrap();
    assert_eq!(course.kind(), learnhub::CourseKind::Interactive);
}

#[test]
fn get_course_miss_names_the_course() {
    let engine = Engine::new();
    let err = engine.get_course("Rust 101").unwrap_err();
    assert!(matches!(err, EngineError::CourseNotFound { .. }));
    assert!(err.to_string().contains("Rust 101"));
}

#[test]
fn course_count_for_an_unregistered_category_fails() {
    let mut other = Engine::new();
    let foreign = other.create_category("Foreign", None);

    let engine = Engine::new();
    let err = engine.course_count(&foreign).unwrap_err();
    assert!(matches!(err, EngineError::UnknownCategory { .. }));
    assert!(err.to_string().contains("Foreign"));
}

#[test]
fn creating_a_course_registers_a_foreign_category() {
    let mut other = Engine::new();
    let foreign = other.create_category("Foreign", None);

    let mut engine = Engine::new();
    engine.create_course("recorded", "X", &foreign).unwrap();

    assert_eq!(engine.categories().len(), 1);
    assert_eq!(engine.course_count(&foreign).unwrap(), 1);
    assert_eq!(engine.find_category_by_id(foreign.id()).unwrap().name(), "Foreign");
}
