//! Interactive confirmation before anything is sent.

use std::io::{self, BufRead, Write};

/// The exact line that allows the send to proceed.
pub const CONFIRMATION_TOKEN: &str = "YES\n";

/// Show `message` on `output` and read one line from `input`.
///
/// Returns `Ok(true)` only when the line is exactly `YES` followed by a
/// newline. End of input, `yes`, `YES ` or anything else returns `Ok(false)`.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the reply fails.
pub fn confirm_send<R, W>(message: &str, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "You are about to send the following message:\n\n{}\n\nAre you sure you want to (type YES if so).\n",
        message
    )?;
    output.flush()?;

    let mut reply = String::new();
    input.read_line(&mut reply)?;

    Ok(reply == CONFIRMATION_TOKEN)
}
