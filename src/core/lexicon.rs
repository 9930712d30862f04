//! The built-in word banks.
//!
//! Leaf data only. Each band keeps its own prefixes, subjects (with the
//! actions bound to each subject), and the three choice-B pools. Tuning
//! wording happens here and nowhere else.

use crate::core::bank::{BandBank, SubjectEntry, VocabularyBank};

type SubjectRow = (&'static str, &'static [&'static str]);

const LOW_PREFIXES: &[&str] = &[
    "Weathered", "Humble", "Wayside", "Mountain", "Mysterious", "Faint", "Mortal", "Abandoned",
    "Age-Old", "Chance", "Quiet", "Desolate", "Plain", "Unremarkable", "Forgotten", "Hidden",
];

const LOW_SUBJECTS: &[SubjectRow] = &[
    (
        "Spirit Spring",
        &[
            "Drink deeply from it",
            "Bottle the water",
            "Bathe in the flow",
            "Sense its currents",
            "Soak your meridians",
            "Still your mind beside it",
        ],
    ),
    (
        "Stone Stele",
        &[
            "Take a rubbing of the script",
            "Ponder the worn carvings",
            "Brush away the dust",
            "Trace the strokes by hand",
            "Study it line by line",
        ],
    ),
    (
        "Wild Beast",
        &[
            "Hunt it down",
            "Drive it off",
            "Skin it for materials",
            "Claim its beast core",
            "Cook a field meal",
        ],
    ),
    (
        "Spirit Herb",
        &[
            "Pick it carefully",
            "Replant it at home",
            "Swallow it whole",
            "Stand guard while it grows",
            "Tend it until it blooms",
        ],
    ),
    (
        "Cave Dwelling",
        &[
            "Search every corner",
            "Gather what was left behind",
            "Sit and meditate",
            "Rest here a while",
            "Lay a simple ward",
        ],
    ),
    (
        "Traveling Peddler",
        &[
            "Trade a few goods",
            "Make friendly talk",
            "Haggle over the prices",
            "Buy out the stock",
        ],
    ),
    (
        "Old Hunter",
        &[
            "Lend a hand",
            "Ask for directions",
            "Leave a few coins",
            "Treat his wounds",
        ],
    ),
    (
        "Wild Fruit",
        &[
            "Eat your fill",
            "Pick them one by one",
            "Brew a rough wine",
            "Dry them for the road",
        ],
    ),
    (
        "Cold Pool",
        &[
            "Temper your body in it",
            "Dive to the bottom",
            "Draw a flask of water",
            "Train in the chill",
        ],
    ),
    (
        "Broken Sword",
        &[
            "Pick it up",
            "Polish away the rust",
            "Sense the lingering intent",
            "Reforge it into a blade",
        ],
    ),
    (
        "Mountain Stream",
        &[
            "Wash off the road dust",
            "Drink from the current",
            "Listen for the Dao in the water",
            "Follow it upstream",
        ],
    ),
];

const LOW_LEAVE: &[&str] = &[
    "Pay it no mind",
    "Turn and walk away",
    "Take the long way around",
    "Pretend not to see",
    "Slip away quietly",
    "Keep your distance",
    "Hurry past",
    "Watch from afar",
];

const LOW_PLAY_SAFE: &[&str] = &[
    "Absorb it carefully",
    "Cultivate at a slow pace",
    "Taste no more than a drop",
    "Observe before acting",
    "Take it one step at a time",
    "Keep a steady footing",
    "Build the foundation first",
];

const LOW_FIGHT_BACK: &[&str] = &[
    "Force a way through",
    "Refuse outright",
    "Stake everything on one blow",
    "Fight to the last breath",
    "Stand your ground",
    "Never retreat a step",
];

const MID_PREFIXES: &[&str] = &[
    "Primeval",
    "Sect-Sealed",
    "Thousand-Year",
    "Raging",
    "Uncanny",
    "Forbidden",
    "Demon-Touched",
    "Pristine",
    "Thunderous",
    "Shrouded",
    "Warped",
    "Peerless",
    "Long-Lost",
    "Perilous",
    "Dazzling",
    "Alluring",
];

const MID_SUBJECTS: &[SubjectRow] = &[
    (
        "Secret Realm",
        &[
            "Force the entrance",
            "Press deeper inside",
            "Seek the formation's eye",
            "Meditate within the array",
            "Break back out through the walls",
        ],
    ),
    (
        "Sect Elder",
        &[
            "Request a pointer",
            "Debate the Dao",
            "Spar a few rounds",
            "Pay a formal visit",
            "Ask humbly for teaching",
        ],
    ),
    (
        "Demon Beast",
        &[
            "Cut it down",
            "Subdue and tame it",
            "Seize the demon core",
            "Refine its blood",
        ],
    ),
    (
        "Spirit Vein",
        &[
            "Draw in the qi",
            "Sever the vein",
            "Carve out a cave estate",
            "Lay a gathering array",
        ],
    ),
    (
        "Tribulation Lightning",
        &[
            "Temper your body in the bolts",
            "Endure the thunder head-on",
            "Study the law of lightning",
            "Collect the lightning fluid",
        ],
    ),
    (
        "Heart Demon",
        &[
            "Hold fast to your core",
            "Cut it down with one sword",
            "Refine it into fuel",
            "Refuse to acknowledge it",
        ],
    ),
    (
        "Grand Formation",
        &[
            "Break through the gate",
            "Ponder its inner meaning",
            "Seize control of the array",
            "Mend the broken lines",
        ],
    ),
    (
        "Alchemy Furnace",
        &[
            "Open the lid",
            "Nurse the pill flame",
            "Take out the elixir",
            "Refine a great medicine",
        ],
    ),
    (
        "Lingering Soul",
        &[
            "Search its memories",
            "Grant it release",
            "Devour its essence",
            "Ask after old secrets",
        ],
    ),
    (
        "Sword Intent",
        &[
            "Observe the edge",
            "Merge it with your own",
            "Stand against it",
            "Subdue and claim it",
        ],
    ),
    (
        "Ruined Sect",
        &[
            "Walk the broken halls",
            "Take the hidden cache",
            "Inherit the legacy",
            "Restore the mountain array",
        ],
    ),
    (
        "Heaven-and-Earth Treasure",
        &[
            "Gather it gently",
            "Nurture it with spirit force",
            "Fuse with its power",
            "Offer it in sacrifice",
        ],
    ),
];

const MID_LEAVE: &[&str] = &[
    "Withdraw with care",
    "Touch no karma here",
    "Watch from a distance",
    "Hold back your curiosity",
    "Weigh the gains and losses",
    "Keep to reason",
    "Wait for another day",
    "Decline to gamble",
];

const MID_PLAY_SAFE: &[&str] = &[
    "Consolidate your cultivation",
    "Put stability first",
    "Warm and nurture the qi",
    "Sit and observe the change",
    "Advance step by measured step",
    "Temper the fire with patience",
    "Thicken the foundation",
    "Draw it in slowly",
];

const MID_FIGHT_BACK: &[&str] = &[
    "Bring out your treasure",
    "Match spells with it",
    "Concede nothing",
    "Oppose it with full strength",
    "Trade blow for blow",
    "Fight a battle of dao",
    "Let sword light speak",
    "Hold the line to the end",
];

const HIGH_PREFIXES: &[&str] = &[
    "Primordial",
    "Void",
    "Heavenly Dao",
    "Chaos",
    "Undying",
    "World-Ending",
    "True Dragon",
    "Starry",
    "Hongmeng",
    "Eternal",
    "Boundless",
    "Supreme",
    "Transcendent",
    "Creation",
    "Unmatched",
    "Heaven-Defying",
];

const HIGH_SUBJECTS: &[SubjectRow] = &[
    (
        "Void Rift",
        &[
            "Draw on the void essence",
            "Seal it with spell force",
            "Step into the hollow",
            "Cross it in the flesh",
        ],
    ),
    (
        "Law Fragment",
        &[
            "Fuse the law into your dao",
            "Contemplate heaven and earth",
            "Brand it on your soul",
            "Devour its power",
        ],
    ),
    (
        "World-Ending Thunder",
        &[
            "Endure the heavens' wrath",
            "Forge it into a treasure",
            "Test the law with your body",
            "Absorb its true meaning",
        ],
    ),
    (
        "Immortal's Remains",
        &[
            "Bow in solemn rite",
            "Search the remains for treasure",
            "Sense the lingering immortal rhyme",
            "Lay them properly to rest",
        ],
    ),
    (
        "River of Time",
        &[
            "Swim against the current",
            "Watch the years flow past",
            "Fish the future from the stream",
            "Sever what has passed",
        ],
    ),
    (
        "World Origin",
        &[
            "Refine the origin",
            "Merge with the source",
            "Shield it with your body",
            "Steal a thread of essence",
        ],
    ),
    (
        "Primordial God",
        &[
            "Debate the Dao with it",
            "Issue a challenge",
            "Listen to its teaching",
            "Watch its slightest move",
        ],
    ),
    (
        "Immortal Palace",
        &[
            "Claim the throne within",
            "Suppress the wardings",
            "Open the great gates",
            "Raise the halls anew",
        ],
    ),
    (
        "Outer Demon Realm",
        &[
            "Carve a path inside",
            "Raise a boundary against it",
            "Refine the demon haze",
            "Scour it from existence",
        ],
    ),
    (
        "Wheel of Reincarnation",
        &[
            "Contemplate the turning",
            "Step beyond the cycle",
            "See a soul to its next life",
            "Turn the wheel backward",
        ],
    ),
    (
        "Chaos Breath",
        &[
            "Devour the chaos",
            "Forge with the unformed",
            "Grasp its true meaning",
            "Ride it where it blows",
        ],
    ),
    (
        "Sea of Stars",
        &[
            "Draw down stellar essence",
            "Guide a star into your body",
            "Read the heavens' pattern",
            "Suppress a falling star",
        ],
    ),
];

const HIGH_LEAVE: &[&str] = &[
    "Dare not touch it",
    "Honor it from afar",
    "Withdraw at once",
    "Step around the karma",
    "Veil yourself and pass",
    "Contend with nothing",
    "Let things follow their course",
    "Force no fated chance",
    "Stay beyond the dust",
];

const HIGH_PLAY_SAFE: &[&str] = &[
    "Ride the current and observe",
    "Borrow its momentum to cultivate",
    "Rein the power with your dao",
    "Linger here a while",
    "Take insight without greed",
    "Balance the opposing forces",
    "Follow the way as it runs",
    "Let stillness run deep",
];

const HIGH_FIGHT_BACK: &[&str] = &[
    "Shatter the void",
    "Defy the heavens",
    "Prove your dao upon it",
    "Overturn earth and sky",
    "Stir wind and cloud",
    "Meet the grand dao edge to edge",
    "Strike the stars from their seats",
    "March against the firmament",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn subjects(rows: &[SubjectRow]) -> Vec<SubjectEntry> {
    rows.iter()
        .map(|(subject, approaches)| SubjectEntry {
            subject: subject.to_string(),
            approaches: strings(approaches),
        })
        .collect()
}

fn band(
    prefixes: &[&str],
    rows: &[SubjectRow],
    leave: &[&str],
    play_safe: &[&str],
    fight_back: &[&str],
) -> BandBank {
    BandBank {
        prefixes: strings(prefixes),
        subjects: subjects(rows),
        leave: strings(leave),
        play_safe: strings(play_safe),
        fight_back: strings(fight_back),
    }
}

/// The built-in vocabulary bank.
pub fn classic() -> VocabularyBank {
    VocabularyBank {
        low: band(
            LOW_PREFIXES,
            LOW_SUBJECTS,
            LOW_LEAVE,
            LOW_PLAY_SAFE,
            LOW_FIGHT_BACK,
        ),
        mid: band(
            MID_PREFIXES,
            MID_SUBJECTS,
            MID_LEAVE,
            MID_PLAY_SAFE,
            MID_FIGHT_BACK,
        ),
        high: band(
            HIGH_PREFIXES,
            HIGH_SUBJECTS,
            HIGH_LEAVE,
            HIGH_PLAY_SAFE,
            HIGH_FIGHT_BACK,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pools_are_stocked() {
        let bank = classic();
        for band in [&bank.low, &bank.mid, &bank.high] {
            assert!(band.prefixes.len() >= 8);
            assert!(band.subjects.len() >= 10);
            assert!(band.leave.len() >= 6);
            assert!(band.play_safe.len() >= 6);
            assert!(band.fight_back.len() >= 6);
            for entry in &band.subjects {
                assert!(entry.approaches.len() >= 4, "{}", entry.subject);
            }
        }
    }

    #[test]
    fn bands_do_not_share_subjects() {
        let bank = classic();
        for low in &bank.low.subjects {
            for high in &bank.high.subjects {
                assert_ne!(low.subject, high.subject);
            }
        }
    }
}
