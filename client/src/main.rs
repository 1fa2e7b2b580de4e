//! Command-line host for the todo client.
//!
//! Executes the requests built by `TodoApp` over real HTTP with ureq. Every
//! command starts by fetching the current list so toggle/delete can resolve
//! ids against the server's state, then prints the resulting list.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use todo_client::{HttpMethod, HttpRequest, ItemId, TodoApp, TransportResult};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Command-line client for the todo service")]
struct Cli {
    /// Base URL of the todo service.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print all todos.
    List,
    /// Add a new todo with the given text.
    Add { text: String },
    /// Flip the completed state of a todo.
    Toggle { id: String },
    /// Delete a todo.
    Delete { id: String },
}

/// Execute an `HttpRequest` with ureq, returning non-2xx responses as data so
/// the client core owns status interpretation.
fn execute(req: HttpRequest) -> TransportResult {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let sent = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    };

    let mut response = sent.map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(todo_client::HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn render(app: &TodoApp) {
    if app.items().is_empty() {
        println!("(no todos)");
        return;
    }
    for item in app.items() {
        let mark = if item.completed { "x" } else { " " };
        println!("[{mark}] {}  {}", item.id, item.text);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut app = TodoApp::new(&cli.api_url);

    let req = app.refresh();
    app.apply_refresh(execute(req));
    if let Some(error) = app.error() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::List => {}
        Command::Add { text } => {
            if let Some(req) = app.add(&text) {
                app.apply_add(execute(req));
            }
        }
        Command::Toggle { id } => {
            let id = ItemId::from(id);
            match app.toggle(&id) {
                Some(req) => app.apply_toggle(&id, execute(req)),
                None => {
                    eprintln!("no todo with id {id}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Delete { id } => {
            let id = ItemId::from(id);
            let req = app.delete(&id);
            app.apply_delete(&id, execute(req));
        }
    }

    if let Some(error) = app.error() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    render(&app);
    ExitCode::SUCCESS
}
