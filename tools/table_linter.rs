/// Table Linter: validates a generated encounter table against the
/// contract the game client relies on.
///
/// Usage: table_linter <table.json>
use encounter_forge::schema::event::{read_table, ChoiceId, EventRecord};
use encounter_forge::schema::stage::Tier;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: table_linter <table.json>");
        process::exit(0);
    }

    let records = match read_table(Path::new(&args[1])) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("ERROR: failed to load table: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded {} records from {}", records.len(), args[1]);

    let (errors, warnings) = lint_table(&records);

    println!("\n=== Table Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_table(records: &[EventRecord]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_ids = FxHashSet::default();

    for record in records {
        if record.id.is_empty() {
            errors.push("record with empty id".to_string());
        } else if !seen_ids.insert(record.id.as_str()) {
            errors.push(format!("{}: duplicate id", record.id));
        }

        if record.title.is_empty() {
            warnings.push(format!("{}: empty title", record.id));
        }
        if record.desc.is_empty() {
            warnings.push(format!("{}: empty desc", record.id));
        }

        lint_choices(record, &mut errors);
        lint_stages(record, &mut errors, &mut warnings);
    }

    (errors, warnings)
}

fn lint_choices(record: &EventRecord, errors: &mut Vec<String>) {
    if record.choices.len() != 2 {
        errors.push(format!(
            "{}: expected 2 choices, found {}",
            record.id,
            record.choices.len()
        ));
        return;
    }
    if record.choices[0].id != ChoiceId::A || record.choices[1].id != ChoiceId::B {
        errors.push(format!("{}: choice ids must be \"a\" then \"b\"", record.id));
    }
    for choice in &record.choices {
        if choice.text.is_empty() {
            errors.push(format!("{}: empty choice text", record.id));
        }
    }
}

fn lint_stages(record: &EventRecord, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let min = Tier::from_stage_name(&record.min_stage);
    let max = Tier::from_stage_name(&record.max_stage);

    let (min, max) = match (min, max) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            errors.push(format!(
                "{}: unknown stage name '{}' or '{}'",
                record.id, record.min_stage, record.max_stage
            ));
            return;
        }
    };

    if max < min {
        errors.push(format!(
            "{}: maxStage '{}' is below minStage '{}'",
            record.id, record.max_stage, record.min_stage
        ));
    } else if max != min.max_stage() {
        warnings.push(format!(
            "{}: maxStage '{}' is not two stages above minStage '{}'",
            record.id, record.max_stage, record.min_stage
        ));
    }

    if record.rarity != min.rarity() {
        errors.push(format!(
            "{}: rarity {:?} does not match stage '{}'",
            record.id, record.rarity, record.min_stage
        ));
    }
}
