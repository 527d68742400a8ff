//! Interactive chat session

use crate::render;
use anyhow::Result;
use aptos_health_chat::{ChatWidget, PatientIntakeForm};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const HELP: &str = "Commands: /balance  /intake  /clear  /history  /help  /quit";

/// Print the transcript tail added since `seen`
fn show_new(widget: &ChatWidget, seen: &mut usize) {
    for message in &widget.messages()[*seen..] {
        render::chat_message(message);
    }
    *seen = widget.messages().len();
}

fn prompt_field(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match rl.readline(&format!("  {}: ", label)) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Walk the intake form field by field; `None` if the user bails out
fn prompt_intake(rl: &mut DefaultEditor) -> Result<Option<PatientIntakeForm>> {
    let mut form = PatientIntakeForm::default();
    let fields: [(&str, &mut String); 8] = [
        ("Patient ID", &mut form.patient_id),
        ("Name", &mut form.name),
        ("Age", &mut form.age),
        ("Gender", &mut form.gender),
        ("Contact", &mut form.contact),
        ("Email", &mut form.email),
        ("Address", &mut form.address),
        ("Medical History", &mut form.medical_history),
    ];
    for (label, slot) in fields {
        match prompt_field(rl, label)? {
            Some(value) => *slot = value,
            None => return Ok(None),
        }
    }
    Ok(Some(form))
}

pub async fn run(widget: &mut ChatWidget, address: Option<&str>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut seen = 0;

    widget.open().await;
    if let Some(label) = widget.wallet_label(address) {
        println!("{}", label.dimmed());
    }
    println!("{}", HELP.dimmed());
    show_new(widget, &mut seen);

    loop {
        let line = match rl.readline("you › ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line)?;
        // typed input is already on screen
        let before = widget.messages().len();

        match line {
            "/quit" | "/exit" => break,
            "/help" => println!("{}", HELP.dimmed()),
            "/balance" => {
                widget.check_balance(address).await;
                show_new(widget, &mut seen);
            }
            "/intake" => {
                widget.toggle_intake();
                if let Some(form) = prompt_intake(&mut rl)? {
                    *widget.intake_mut() = form;
                    widget.submit_intake(address).await;
                    show_new(widget, &mut seen);
                }
                if widget.show_intake() {
                    widget.toggle_intake();
                }
            }
            "/clear" => {
                widget.clear_history().await;
                seen = 0;
                show_new(widget, &mut seen);
            }
            "/history" => match widget.history().await {
                Ok(entries) => render::history(&entries),
                Err(e) => println!("{} {}", "error:".red().bold(), e),
            },
            text => {
                widget.send(text, address).await;
                seen = before + 1;
                show_new(widget, &mut seen);
            }
        }
    }

    widget.close();
    Ok(())
}
