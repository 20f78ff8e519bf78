// src/bin/employee_client.rs

use clap::Parser;
use employee_directory::client::{ClientView, FormField, HttpEmployeeApi, ViewMode};
use employee_directory::infra::{config, logging};
use std::io::{self, BufRead, Write};

/// Terminal front end for the employee API.
#[derive(Parser, Debug)]
#[command(name = "employee-client", version, about)]
struct Args {
    /// Base URL of the API server.
    #[arg(long, env = "EMPLOYEE_API_URL", default_value = "http://localhost:3000")]
    base_url: String,
}

const HELP: &str = "Commands:
  list          re-fetch and show all employees
  add           fill the form and create an employee
  edit <n>      edit employee number <n>
  delete <n>    delete employee number <n> (asks first)
  help          show this text
  quit          exit
While filling the form, enter `.` to cancel.";

/// Reads one trimmed line; `None` on end of input.
fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts every form field. Returns false when the user cancelled.
fn fill_form(
    view: &mut ClientView<HttpEmployeeApi>,
    stdin: &mut impl BufRead,
) -> io::Result<bool> {
    for field in FormField::ALL {
        let current = view.form().get(field).to_string();
        let label = if current.is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), current)
        };
        match prompt(stdin, &label)? {
            None => return Ok(false),
            Some(v) if v == "." => return Ok(false),
            Some(v) if v.is_empty() => {}
            Some(v) => view.set_field(field, v),
        }
    }
    Ok(true)
}

fn pick_index(view: &ClientView<HttpEmployeeApi>, arg: Option<&str>) -> Option<usize> {
    let n = arg?.parse::<usize>().ok()?;
    (1..=view.employees().len()).contains(&n).then(|| n - 1)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    if let Err(e) = logging::init_logging(&std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())) {
        eprintln!("> Logging disabled: {}", e);
    }
    let args = Args::parse();

    let mut view = ClientView::new(HttpEmployeeApi::new(args.base_url));
    println!("Employee Management System ({})", view.api().base_url());
    view.refresh().await;
    println!("{}", view.render());
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    loop {
        let Some(line) = prompt(&mut stdin, "> ")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "list" => {
                view.refresh().await;
            }
            "add" => {
                if let ViewMode::Editing(_) = view.mode() {
                    view.cancel_edit();
                }
                if fill_form(&mut view, &mut stdin)? {
                    view.submit().await;
                } else {
                    view.cancel_edit();
                }
            }
            "edit" => {
                let Some(idx) = pick_index(&view, arg) else {
                    println!("Usage: edit <n> (1..={})", view.employees().len());
                    continue;
                };
                let employee = view.employees()[idx].clone();
                view.begin_edit(&employee);
                println!("{}", view.render());
                if fill_form(&mut view, &mut stdin)? {
                    view.submit().await;
                } else {
                    view.cancel_edit();
                }
            }
            "delete" => {
                let Some(idx) = pick_index(&view, arg) else {
                    println!("Usage: delete <n> (1..={})", view.employees().len());
                    continue;
                };
                let id = view.employees()[idx].id;
                let answer = prompt(
                    &mut stdin,
                    "Are you sure you want to delete this employee? [y/N] ",
                )?;
                let confirmed = matches!(answer.as_deref(), Some("y") | Some("Y") | Some("yes"));
                view.delete(id, || confirmed).await;
            }
            other => {
                println!("Unknown command `{}`. Type `help`.", other);
                continue;
            }
        }
        println!("{}", view.render());
    }

    Ok(())
}
