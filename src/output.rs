use std::io::{self, Write};

/// Writes `message` to stdout as is, and to `writer` when one is given.
pub fn print(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(message.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Failed to write to standard output: {e}");
    }

    if let Some(w) = writer {
        w.write_all(message.as_bytes())?;
    }

    Ok(())
}

pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    print(&format!("{message}\n"), writer)
}
