//! Creation form: local input state for a new todo.

use crate::http::Transport;
use crate::page::TodoPage;
use crate::types::CreateTodo;

/// Staging buffers for a new todo. Submission trims both fields, normalizes
/// an empty description to `null`, and hands the payload to the page's add
/// operation.
#[derive(Debug, Default)]
pub struct AddTodoForm {
    title: String,
    description: String,
}

impl AddTodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// The submit affordance is enabled only for a non-blank title.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Submit the staged todo. A blank title is a no-op that leaves the
    /// buffers alone. Otherwise both fields are cleared once the add call
    /// settles, whether or not it succeeded; a failure is reported through
    /// the page's error state.
    pub fn submit<T: Transport>(&mut self, page: &mut TodoPage<T>) -> bool {
        if !self.can_submit() {
            return false;
        }
        let data = CreateTodo::new(&self.title, &self.description);
        let ok = page.add_todo(data);
        self.title.clear();
        self.description.clear();
        ok
    }

    /// Enter in the title field submits, unless Shift is held.
    pub fn enter_pressed<T: Transport>(&mut self, page: &mut TodoPage<T>, shift: bool) -> bool {
        if shift {
            return false;
        }
        self.submit(page)
    }
}
