use std::rc::Rc;

use rusqlite::{params, Connection};

use crate::domain::model::Student;
use crate::utils::error::{EngineError, Result};

const TABLE: &str = "student";

/// Data mapper for the student table. Copies field values between domain
/// students and rows; never owns the entities it maps. All values travel as
/// bound parameters.
#[derive(Debug)]
pub struct StudentMapper {
    conn: Rc<Connection>,
}

impl StudentMapper {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    /// Every stored student, fully materialized before returning.
    pub fn all(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, name FROM {TABLE}"))?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut students = Vec::new();
        for row in rows {
            let (id, name) = row?;
            let student = Student::new(&name);
            student.set_id(id);
            students.push(student);
        }
        Ok(students)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Student> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, name FROM {TABLE} WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        });
        match result {
            Ok((id, name)) => {
                let student = Student::new(&name);
                student.set_id(id);
                Ok(student)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(EngineError::RecordNotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts the student's fields. The generated key is not written back
    /// into the entity; fetch it with [`last_insert_id`](Self::last_insert_id)
    /// if the caller wants to attach it.
    pub fn insert(&self, student: &Student) -> Result<()> {
        self.conn
            .execute(
                &format!("INSERT INTO {TABLE} (name) VALUES (?1)"),
                params![student.name()],
            )
            .map_err(EngineError::DbCommit)?;
        Ok(())
    }

    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    pub fn update(&self, student: &Student) -> Result<()> {
        let id = student.id().ok_or(EngineError::MissingId)?;
        self.conn
            .execute(
                &format!("UPDATE {TABLE} SET name = ?1 WHERE id = ?2"),
                params![student.name(), id],
            )
            .map_err(EngineError::DbUpdate)?;
        Ok(())
    }

    pub fn delete(&self, student: &Student) -> Result<()> {
        let id = student.id().ok_or(EngineError::MissingId)?;
        self.conn
            .execute(
                &format!("DELETE FROM {TABLE} WHERE id = ?1"),
                params![id],
            )
            .map_err(EngineError::DbDelete)?;
        Ok(())
    }
}
