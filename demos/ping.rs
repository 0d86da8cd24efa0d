mod common;

use clickatell::NO_PARAMS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::connect_from_env()?;
    let response = client.ping(NO_PARAMS)?;

    println!("session ok: {:?}", response.single("OK"));

    Ok(())
}
