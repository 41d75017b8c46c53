use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use learnhub::storage::{self, MapperRegistry};
use learnhub::utils::logger::{self, Logger};
use learnhub::{Course, Engine, EnrollmentObserver, Student, User};

#[derive(Debug, Parser)]
#[command(name = "learnhub")]
#[command(about = "In-process learning platform demo")]
struct Cli {
    /// SQLite database file
    #[arg(long, default_value = "learnhub.sqlite")]
    database: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

struct EnrollmentLog(Logger);

impl EnrollmentObserver for EnrollmentLog {
    fn on_student_added(&self, course: &Course, student: &Student) {
        self.0
            .log(&format!("{} enrolled in {}", student.name(), course.name()));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let logger = Logger::global("learnhub");
    let mut engine = Engine::with_logger(logger.clone());

    let python = engine.create_category("Python", None);
    let advanced = engine.create_category("Advanced", Some(&python));

    let oop = engine.create_course("interactive", "OOP patterns", &python)?;
    engine.create_course("recorded", "English for programmers", &advanced)?;
    oop.subscribe(Rc::new(EnrollmentLog(logger.clone())));

    engine.create_user("tutor", "Marge")?;
    let user = engine.create_user("student", "Ann")?;

    if let User::Student(ann) = &user {
        oop.add_student(ann);

        let conn = Rc::new(storage::open(&cli.database)?);
        let registry = MapperRegistry::new(conn);
        let mapper = registry.get_current_mapper("student")?;
        mapper.insert(ann)?;
        ann.set_id(mapper.last_insert_id());
        logger.log(&format!(
            "persisted student {} with id {}",
            ann.name(),
            mapper.last_insert_id()
        ));
    }

    tracing::info!(
        "derived count for {}: {}",
        python.name(),
        engine.course_count(&python)?
    );
    tracing::info!(
        "hierarchy count for {}: {}",
        advanced.name(),
        advanced.course_count()
    );

    Ok(())
}
