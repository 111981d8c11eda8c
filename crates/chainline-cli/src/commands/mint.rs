//! Mint command implementation.

use chainline_core::IdentifierMinter;

pub fn run(count: u32, random: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let minter = IdentifierMinter::new()?;

    let mut ids = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = if random {
            minter.mint_random()?
        } else {
            minter.mint_ordered()
        };
        ids.push(id.to_string());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        for id in &ids {
            println!("{}", id);
        }
    }

    Ok(())
}
