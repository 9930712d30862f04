/// Preview: prints sample events per stage for quick copy review.
///
/// Usage: preview [--profile <name>] [--seed <n>] [--per-tier <n>]
use encounter_forge::core::forge::EventForge;
use encounter_forge::profiles;
use encounter_forge::schema::effect::Effect;
use encounter_forge::schema::event::ChoiceId;
use encounter_forge::schema::stage::Tier;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut profile_name = "classic".to_string();
    let mut seed: u64 = 42;
    let mut per_tier: u32 = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--profile" if i + 1 < args.len() => {
                i += 1;
                profile_name = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--per-tier" if i + 1 < args.len() => {
                i += 1;
                per_tier = args[i].parse().unwrap_or(3);
            }
            "--help" | "-h" => {
                println!("Usage: preview [--profile <name>] [--seed <n>] [--per-tier <n>]");
                println!("Profiles: {}", profiles::names().join(", "));
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let profile = profiles::by_name(&profile_name).unwrap_or_else(|| {
        eprintln!(
            "Error: unknown profile '{}'. Available: {}",
            profile_name,
            profiles::names().join(", ")
        );
        process::exit(1);
    });

    let mut forge = EventForge::builder()
        .profile(&profile)
        .seed(seed)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error building forge: {}", e);
            process::exit(1);
        });

    println!("Profile '{}', seed {}\n", profile.name, seed);

    for tier in Tier::all() {
        println!(
            "== Stage {} ({}) [{:?}] ==",
            tier.index(),
            tier.stage_name(),
            tier.rarity()
        );
        for _ in 0..per_tier {
            match forge.generate_one(tier) {
                Ok(record) => {
                    println!("  {}", record.title);
                    println!("    {}", record.desc);
                    for choice in &record.choices {
                        let slot = match choice.id {
                            ChoiceId::A => "a",
                            ChoiceId::B => "b",
                        };
                        println!(
                            "    [{}] {} -> {}",
                            slot,
                            choice.text,
                            describe_effect(&choice.effect)
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error generating event: {}", e);
                    process::exit(1);
                }
            }
        }
        println!();
    }
}

fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::Nothing => "nothing".to_string(),
        Effect::GainQi { value } => format!("gain {} qi", value),
        Effect::LoseQi { value } => format!("lose {} qi", value),
        Effect::Gamble { value } => format!("gamble {} qi", value),
        Effect::GrantItem { .. } => "grant a random item".to_string(),
        Effect::GainAutoTemp { value, duration } => {
            format!("+{}x idle gain for {}s", value, duration)
        }
        Effect::GainTapRatioTemp { value, duration } => {
            format!("+{}x tap gain for {}s", value, duration)
        }
        Effect::GambleAuto { value, duration } => {
            format!("gambled {}x idle buff for {}s", value, duration)
        }
        Effect::GambleTap { value, duration } => {
            format!("gambled {}x tap buff for {}s", value, duration)
        }
    }
}
