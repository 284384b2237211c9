use agonyl::{MapBin, MonsterBin, NpcFile, SpawnList};
use anyhow::{bail, Result};
use std::{fs::File, io::BufReader, path::PathBuf};
use structopt::StructOpt;

/// Print the entries of an A3 bin file.
#[derive(Debug, StructOpt)]
struct Cli {
    /// Kind of file: 'map', 'monster', 'npc' or 'spawn'.
    kind: String,
    /// Input file.
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> Result<()> {
    let Cli { kind, input } = Cli::from_args();
    let f = BufReader::new(File::open(input)?);

    match kind.as_str() {
        "map" => {
            let bin = MapBin::read_from(f)?;
            for map in &bin {
                println!("{:5} {}", map.id, map.name()?);
            }
        }
        "monster" => {
            let bin = MonsterBin::read_from(f)?;
            for monster in &bin {
                println!("{:5} {}", monster.id, monster.name()?);
            }
        }
        "npc" => {
            let npc = NpcFile::read_from(f)?;
            println!("{} ({})", npc.name()?, npc.id);
            println!("  Level: {}", npc.level);
            println!("  HP: {}", npc.hp);
            println!("  Defense: {} + {}", npc.defense, npc.additional_defense);
            for (index, attack) in npc.attacks.iter().enumerate() {
                println!(
                    "  Attack {}: range {} area {} damage {} + {}",
                    index, attack.range, attack.area, attack.damage, attack.additional_damage
                );
            }
            println!("  Respawn rate: {}", npc.respawn_rate);
            println!("  Player exp: {}", npc.player_exp);
        }
        "spawn" => {
            let list = SpawnList::read_from(f)?;
            for spawn in &list {
                println!(
                    "{:5} at ({:3}, {:3}) facing {} step {}",
                    spawn.id, spawn.x, spawn.y, spawn.orientation, spawn.spawn_step
                );
            }
        }
        name => bail!("unknown bin kind {}", name),
    }

    Ok(())
}
