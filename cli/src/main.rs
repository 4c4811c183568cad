//! Interactive terminal front end for the todo service.
//!
//! # Design
//! A line-oriented command loop standing in for the original single-page UI:
//! the page state is loaded once at startup, every mutation goes through
//! `TodoPage`, and the view (error banner, summary counts, item list) is
//! re-rendered after each command. Deleting asks for confirmation first, and
//! editing keeps the user's buffers when the save fails.

mod transport;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use todomaster_core::{config, list, AddTodoForm, ItemEditor, Todo, TodoId, TodoPage};
use tracing_subscriber::EnvFilter;

use transport::UreqTransport;

type Page = TodoPage<UreqTransport>;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Add { title: String, description: String },
    Edit(TodoId),
    Toggle(TodoId),
    Remove(TodoId),
    Health,
    Retry,
    Dismiss,
    Help,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let base_url = config::base_url_from_env();
    println!("Todo Master ({base_url})");
    println!("Type 'help' for commands.");

    let mut page = TodoPage::new(&base_url, UreqTransport::new());
    page.load_todos();
    render(&page);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::List => {
                page.load_todos();
                render(&page);
            }
            Command::Add { title, description } => {
                let mut form = AddTodoForm::new();
                form.set_title(&title);
                form.set_description(&description);
                if !form.can_submit() {
                    println!("Title must not be empty.");
                    continue;
                }
                form.submit(&mut page);
                render(&page);
            }
            Command::Edit(id) => {
                edit_item(&mut page, id, &mut lines)?;
                render(&page);
            }
            Command::Toggle(id) => {
                match find_todo(&page, id) {
                    Some(todo) => {
                        ItemEditor::new(&todo).toggle_completed(&mut page);
                    }
                    None => println!("No todo with id {id}."),
                }
                render(&page);
            }
            Command::Remove(id) => {
                delete_item(&mut page, id, &mut lines)?;
                render(&page);
            }
            Command::Health => match page.health_check() {
                Ok(health) => println!("Backend status: {}", health.status),
                Err(err) => println!("Health check failed: {}", err.user_message()),
            },
            Command::Retry => {
                page.retry();
                render(&page);
            }
            Command::Dismiss => {
                page.dismiss_error();
                render(&page);
            }
        }
    }
    Ok(())
}

/// `Ok(None)` means an empty line: nothing to do.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word {
        "list" | "ls" => Command::List,
        "add" => {
            // description is optional, separated from the title by '|'
            let (title, description) = match rest.split_once('|') {
                Some((title, description)) => (title.trim(), description.trim()),
                None => (rest, ""),
            };
            Command::Add {
                title: title.to_string(),
                description: description.to_string(),
            }
        }
        "edit" => Command::Edit(parse_id(rest)?),
        "toggle" | "done" => Command::Toggle(parse_id(rest)?),
        "rm" | "delete" => Command::Remove(parse_id(rest)?),
        "health" => Command::Health,
        "retry" => Command::Retry,
        "dismiss" => Command::Dismiss,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    };
    Ok(Some(command))
}

fn parse_id(arg: &str) -> Result<TodoId, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("Expected a numeric todo id, got '{}'.", arg.trim()))
}

fn find_todo(page: &Page, id: TodoId) -> Option<Todo> {
    page.todos().iter().find(|t| t.id == id).cloned()
}

fn edit_item(
    page: &mut Page,
    id: TodoId,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let Some(todo) = find_todo(page, id) else {
        println!("No todo with id {id}.");
        return Ok(());
    };
    let mut editor = ItemEditor::new(&todo);
    editor.start_edit(&todo);

    if let Some(title) = prompt(lines, &format!("Title [{}]: ", editor.edit_title()))? {
        if !title.trim().is_empty() {
            editor.set_edit_title(&title);
        }
    }
    let current = if editor.edit_description().is_empty() {
        "none".to_string()
    } else {
        editor.edit_description().to_string()
    };
    if let Some(description) = prompt(lines, &format!("Description [{current}]: "))? {
        if !description.trim().is_empty() {
            editor.set_edit_description(&description);
        }
    }

    if !editor.save(page) && editor.is_editing() {
        // save failed; buffers are preserved but this loop has no sticky
        // edit mode, so fall back to viewing without losing the server copy
        editor.cancel_edit(&todo);
    }
    Ok(())
}

fn delete_item(
    page: &mut Page,
    id: TodoId,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let Some(todo) = find_todo(page, id) else {
        println!("No todo with id {id}.");
        return Ok(());
    };
    let mut editor = ItemEditor::new(&todo);
    editor.request_delete();
    let answer = prompt(lines, "Are you sure you want to delete this todo? [y/N] ")?;
    match answer.as_deref().map(str::trim) {
        Some("y") | Some("Y") | Some("yes") => {
            editor.confirm_delete(page);
        }
        _ => editor.cancel_delete(),
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}

fn render(page: &Page) {
    if let Some(err) = page.error() {
        println!("Error: {err} (type 'retry' or 'dismiss')");
    }
    let todos = page.todos();
    if todos.is_empty() {
        println!("{}", list::EMPTY_STATE);
        return;
    }
    println!("Your todos ({})", list::summarize(todos));
    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };
        let date = format_date(&todo.created_at);
        match &todo.description {
            Some(description) => {
                println!("  [{mark}] #{} {}: {description} (created {date})", todo.id, todo.title)
            }
            None => println!("  [{mark}] #{} {} (created {date})", todo.id, todo.title),
        }
    }
}

fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn print_help() {
    println!("Commands:");
    println!("  list                 reload and show the collection");
    println!("  add <title>[|desc]   create a todo");
    println!("  edit <id>            edit title/description");
    println!("  toggle <id>          flip completion");
    println!("  rm <id>              delete (asks for confirmation)");
    println!("  health               probe the backend");
    println!("  retry                re-issue the load after an error");
    println!("  dismiss              clear the error banner");
    println!("  quit                 exit");
}
