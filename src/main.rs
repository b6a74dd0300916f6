use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use maskedit::cli::CliArgs;
use maskedit::config::MaskConfig;
use maskedit::mask::MaskedField;
use maskedit::script::{self, Keystroke};

/// One printed replay step
#[derive(Serialize)]
struct Step<'a> {
    key: Option<&'a Keystroke>,
    text: &'a str,
    cursor: usize,
    value: String,
    complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    maskedit::tracing::init();

    let args = CliArgs::parse();
    let config = args.apply_to(MaskConfig::load(args.config.as_deref()));

    let source = match &args.script {
        Some(script) => script.clone(),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read script from stdin")?;
            input.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    let keys = script::parse(&source).context("Invalid keystroke script")?;

    let controller = config
        .build_controller()
        .with_context(|| format!("Cannot use mask {:?}", config.mask))?;
    let mut field = MaskedField::new(controller);
    if let Some(initial) = &args.initial {
        field.set_value(initial);
    }

    print_step(&field, None, None, args.json)?;
    for key in &keys {
        let error = field.press(key).err().map(|e| e.to_string());
        print_step(&field, Some(key), error, args.json)?;
    }

    Ok(())
}

fn print_step(
    field: &MaskedField,
    key: Option<&Keystroke>,
    error: Option<String>,
    json: bool,
) -> Result<()> {
    let step = Step {
        key,
        text: field.text(),
        cursor: field.cursor(),
        value: field.value(),
        complete: field.is_complete(),
        error,
    };

    if json {
        println!("{}", serde_json::to_string(&step)?);
        return Ok(());
    }

    let label = match step.key {
        Some(key) => format!("{:?}", key),
        None => "start".to_string(),
    };
    println!("{:<18} {}", label, step.text);
    println!("{:<18} {}^ {}", "", " ".repeat(step.cursor), step.cursor);
    if let Some(error) = &step.error {
        println!("{:<18} error: {}", "", error);
    }
    Ok(())
}
