//! In-memory owner of the todo collection and the id counter.
//!
//! # Design
//! `TodoStore` is a plain value with `&mut self` mutators; sharing and
//! serialisation of access live in [`crate::state::AppState`]. Records are
//! kept in a `Vec` in insertion order and looked up by a linear scan.
//! Ids come from a counter that only moves forward, so an id is never handed
//! out twice even after the record it named was deleted.

use chrono::Utc;

use crate::error::TodoError;
use crate::model::{Todo, TodoId};

const FIRST_ID: TodoId = 1;

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Result<&Todo, TodoError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)
    }

    /// Append a new todo holding the trimmed `text`.
    ///
    /// Fails with a validation error, without consuming an id, when `text`
    /// is absent or blank after trimming.
    pub fn create(&mut self, text: Option<&str>) -> Result<Todo, TodoError> {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(TodoError::text_required)?;

        let id = self.next_id;
        self.next_id += 1;

        let todo = Todo {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Set the completion flag of an existing todo. No other field changes.
    pub fn update_completion(&mut self, id: TodoId, completed: bool) -> Result<Todo, TodoError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)?;
        todo.completed = completed;
        Ok(todo.clone())
    }

    /// Remove exactly the todo with `id`, keeping the others in order.
    pub fn delete(&mut self, id: TodoId) -> Result<(), TodoError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)?;
        self.todos.remove(index);
        Ok(())
    }

    /// Drop every todo and restart ids at 1.
    pub fn reset(&mut self) {
        self.todos.clear();
        self.next_id = FIRST_ID;
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
