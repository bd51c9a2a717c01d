use crate::error::Result;
use mutpep::core::models::amino_acid::{self, STOP_TOKEN};
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    write_table(&mut stdout.lock())?;
    Ok(())
}

/// One line per canonical token, listing the codes that map to it.
pub fn write_table(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Token  Codes")?;
    for (token, codes) in amino_acid::codes_by_token() {
        let note = if token == STOP_TOKEN { "  (stop)" } else { "" };
        writeln!(writer, "{:<5}  {}{}", token, codes.join(", "), note)?;
    }
    writeln!(
        writer,
        "\nCanonical tokens are accepted as codes too; any other code rejects its record."
    )
}
