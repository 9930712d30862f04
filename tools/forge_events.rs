/// Forge Events: generates a random-encounter table and writes it as JSON.
///
/// Usage: forge_events --output <file.json> [--profile <name>] [--seed <n>]
///                     [--bank <file.ron>] [--prefix <str>] [--total <n>]
use encounter_forge::core::bank::VocabularyBank;
use encounter_forge::core::forge::{EventForge, ForgeError, GenerationPlan};
use encounter_forge::profiles;
use encounter_forge::schema::event::{write_table, EventRecord};
use encounter_forge::schema::stage::{Rarity, Tier};
use std::path::Path;
use std::process;

const USAGE: &str = "Usage: forge_events --output <file.json> [--profile <name>] [--seed <n>] [--bank <file.ron>] [--prefix <str>] [--total <n>]";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output = None;
    let mut profile_name = "classic".to_string();
    let mut seed = None;
    let mut bank_path = None;
    let mut prefix = None;
    let mut total = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--profile" if i + 1 < args.len() => {
                i += 1;
                profile_name = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].parse::<u64>().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an integer");
                    process::exit(1);
                }));
            }
            "--bank" if i + 1 < args.len() => {
                i += 1;
                bank_path = Some(args[i].clone());
            }
            "--prefix" if i + 1 < args.len() => {
                i += 1;
                prefix = Some(args[i].clone());
            }
            "--total" if i + 1 < args.len() => {
                i += 1;
                total = Some(args[i].parse::<u32>().unwrap_or_else(|_| {
                    eprintln!("Error: --total must be an integer");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!("Profiles: {}", profiles::names().join(", "));
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let output_path = output.unwrap_or_else(|| {
        eprintln!("Error: --output is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let profile = profiles::by_name(&profile_name).unwrap_or_else(|| {
        eprintln!(
            "Error: unknown profile '{}'. Available: {}",
            profile_name,
            profiles::names().join(", ")
        );
        process::exit(1);
    });

    let mut builder = EventForge::builder().profile(&profile);
    if let Some(ref path) = bank_path {
        match VocabularyBank::load_from_ron(Path::new(path)) {
            Ok(bank) => builder = builder.bank(bank),
            Err(e) => {
                eprintln!("Error loading bank '{}': {}", path, e);
                process::exit(1);
            }
        }
    }
    if let Some(ref p) = prefix {
        builder = builder.id_prefix(p);
    }
    if let Some(t) = total {
        builder = builder.plan(GenerationPlan::Spread { total: t });
    }
    if let Some(s) = seed {
        builder = builder.seed(s);
    }

    let mut forge = builder.build().unwrap_or_else(|e| {
        eprintln!("Error building forge: {}", e);
        process::exit(1);
    });

    println!(
        "Forging encounter table: profile '{}', {} records...",
        profile.name,
        forge.plan().total()
    );

    let records = generate_with_progress(&mut forge).unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        process::exit(1);
    });

    if let Err(e) = write_table(Path::new(&output_path), &records) {
        eprintln!("Error writing '{}': {}", output_path, e);
        process::exit(1);
    }

    let mut common = 0u32;
    let mut rare = 0u32;
    let mut epic = 0u32;
    for record in &records {
        match record.rarity {
            Rarity::Common => common += 1,
            Rarity::Rare => rare += 1,
            Rarity::Epic => epic += 1,
        }
    }

    println!("Done. {} events written to {}", records.len(), output_path);
    println!(
        "Rarity spread: {} common, {} rare, {} epic",
        common, rare, epic
    );
}

/// Pyramid plans sweep the ladder tier by tier, so print a line per stage;
/// spread plans roll random tiers and just run in one go.
fn generate_with_progress(forge: &mut EventForge) -> Result<Vec<EventRecord>, ForgeError> {
    let plan = forge.plan();
    match plan {
        GenerationPlan::Pyramid { .. } => {
            let mut records = Vec::with_capacity(plan.total() as usize);
            for tier in Tier::all() {
                let quota = plan.quota(tier);
                for _ in 0..quota {
                    records.push(forge.generate_one(tier)?);
                }
                println!(
                    "  stage {:>2} {:<24} {:>4} events",
                    tier.index(),
                    tier.stage_name(),
                    quota
                );
            }
            Ok(records)
        }
        GenerationPlan::Spread { .. } => forge.generate(),
    }
}
