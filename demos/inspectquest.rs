use agonyl::QuestFile;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;

fn main() {
    let log_level = std::env::var("LOG")
        .ok()
        .and_then(|value| match value.as_str() {
            "info" => Some(LevelFilter::Info),
            "debug" => Some(LevelFilter::Debug),
            "trace" => Some(LevelFilter::Trace),
            _ => None,
        })
        .unwrap_or(LevelFilter::Warn);
    let infile = std::env::args().nth(1).expect("usage: inspectquest <input>");

    TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let f = File::open(infile).expect("could not read file");
    let quest = QuestFile::read_from(f).expect("invalid quest file");
    let header = &quest.header;

    println!("Quest: {}", header.quest_id());
    println!("  Given by NPC: {}", header.given_npc_id());
    println!("  Target NPC: {}", header.target_npc_id());
    println!("  Levels: {}-{}", header.min_level(), header.max_level());
    println!("  Flags: {:#010x}", header.quest_flags());
    println!();

    println!("Rewards:");
    for index in 0..agonyl::quest::NUM_REWARDS {
        match header.reward_item(index) {
            Some(item) => println!("  {}x item {}", header.reward_count(index), item),
            None => println!("  (empty)"),
        }
    }
    println!("  Experience: {}", header.experience());
    println!("  Woonz: {}", header.woonz());
    println!("  Lore: {}", header.lore());
    println!();

    println!("Objectives:");
    for (slot, objective) in quest.objectives.iter().enumerate() {
        if objective.is_unused() {
            println!("  {}: (unused)", slot);
            continue;
        }
        match objective.objective_type() {
            Ok(kind) if kind.allows_name() => println!(
                "  {}: {:?} {}",
                slot,
                kind,
                objective
                    .name_str()
                    .unwrap_or_else(|_| format!("{:?}", objective.name()))
            ),
            Ok(kind) => println!("  {}: {:?}", slot, kind),
            Err(err) => println!("  {}: {}", slot, err),
        }
    }
    println!();

    println!("Continuation:");
    for link in quest.continuation.links() {
        println!("  {}", link);
    }
}
