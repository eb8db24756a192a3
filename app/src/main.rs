//! Line-oriented terminal front-end for the todo collection.
//!
//! Single-threaded event loop: read a command, drive the client through one
//! fire-and-resync operation, then re-render the full list followed by any
//! pending error. The rendered order is always the server's order. An
//! initial refresh runs at startup, so the first prompt already shows the
//! current collection.
//!
//! The base address comes from `TODO_API_URL`; log verbosity from
//! `RUST_LOG` (library events go to stderr, the list to stdout).

use std::io::{self, BufRead, Write};

use todo_client::TodoListClient;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Remove(usize),
    Refresh,
    Help,
    Quit,
}

const USAGE: &str = "commands: add <title> | rm <n> | ls | help | quit";

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        // Title validation (non-empty) belongs to the client, not here.
        "add" => Ok(Command::Add(rest.to_string())),
        "rm" => rest
            .parse::<usize>()
            .map(Command::Remove)
            .map_err(|_| "rm takes the item's list position, e.g. `rm 1`".to_string()),
        "ls" | "refresh" => Ok(Command::Refresh),
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err(USAGE.to_string()),
        other => Err(format!("unknown command `{other}`; {USAGE}")),
    }
}

/// Re-render the full list, then report any error the last operation left
/// behind. Errors are taken from the client exactly once.
fn render(client: &mut TodoListClient) {
    if client.todos().is_empty() {
        println!("(no todos)");
    }
    for (position, todo) in client.todos().iter().enumerate() {
        let mark = if todo.completed { 'x' } else { ' ' };
        println!("{:3}. [{mark}] {}", position + 1, todo.title);
    }
    if let Some(err) = client.take_error() {
        println!("! {err}");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut client = TodoListClient::new(&base_url);

    println!("todo list @ {base_url}  ({USAGE})");
    client.refresh();
    render(&mut client);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{USAGE}"),
            Ok(Command::Refresh) => {
                client.refresh();
                render(&mut client);
            }
            Ok(Command::Add(title)) => {
                client.set_draft(title);
                client.submit_draft();
                render(&mut client);
            }
            Ok(Command::Remove(position)) => {
                match client.todos().get(position.wrapping_sub(1)) {
                    Some(todo) => {
                        let id = todo.id;
                        client.remove(id);
                        render(&mut client);
                    }
                    None => println!("no item at position {position}"),
                }
            }
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}
