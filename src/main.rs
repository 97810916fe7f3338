use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use groupset::operations::exec;

fn main() -> Result<()> {
    env_logger::init();
    let args = groupset::args::parsed()?;

    let stdout = io::stdout();
    if stdout.is_terminal() {
        exec(&args, stdout.lock())
    } else {
        exec(&args, io::BufWriter::new(stdout.lock()))
    }
}
