use agonyl::QuestFile;
use std::{fs::File, io::Write, path::PathBuf};
use structopt::StructOpt;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Read a quest file and write it back out, checking that nothing changed.
#[derive(Debug, StructOpt)]
struct Cli {
    /// Input quest file.
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Output quest file. Only checks the round trip if omitted.
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> CliResult {
    let Cli { input, output } = Cli::from_args();

    let original = std::fs::read(input)?;
    let quest = QuestFile::from_bytes(&original)?;
    let encoded = quest.to_bytes()?;

    if encoded == original {
        println!("Round trip is byte-identical ({} bytes)", encoded.len());
    } else {
        println!(
            "Round trip differs: read {} bytes, wrote {} bytes",
            original.len(),
            encoded.len()
        );
    }

    if let Some(output) = output {
        let mut outstream = File::create(output)?;
        outstream.write_all(&encoded)?;
    }

    Ok(())
}
