use std::rc::Rc;

use rusqlite::Connection;

use crate::domain::model::User;
use crate::storage::mapper::StudentMapper;
use crate::utils::error::{EngineError, Result};

// Static registration table: type name to mapper constructor. Only students
// are persisted; tutors live purely in memory.
const MAPPERS: &[(&str, fn(Rc<Connection>) -> StudentMapper)] = &[("student", StudentMapper::new)];

/// Resolves an entity (or a type name) to a mapper bound to the single
/// shared connection.
pub struct MapperRegistry {
    conn: Rc<Connection>,
}

impl MapperRegistry {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    pub fn get_mapper(&self, user: &User) -> Result<StudentMapper> {
        match user {
            User::Student(_) => Ok(StudentMapper::new(Rc::clone(&self.conn))),
            User::Tutor(_) => Err(EngineError::UnregisteredType {
                name: user.kind().as_str().to_string(),
            }),
        }
    }

    pub fn get_current_mapper(&self, name: &str) -> Result<StudentMapper> {
        MAPPERS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, build)| build(Rc::clone(&self.conn)))
            .ok_or_else(|| EngineError::UnregisteredType {
                name: name.to_string(),
            })
    }
}
