//! Check command implementation.

use anyhow::Result;

use crate::domain::{is_comment_or_blank, Domain};

/// Run one line through the validator and report what happens to it.
pub fn run(line: &str) -> Result<()> {
    println!();
    if is_comment_or_blank(line) {
        println!("'{}' is skipped (blank or comment line)", line);
    } else {
        match line.trim().parse::<Domain>() {
            Ok(domain) => println!("'{}' is accepted as '{}'", line.trim(), domain),
            Err(err) => println!("{}", err),
        }
    }
    println!();

    Ok(())
}
