mod common;

use clickatell::NO_PARAMS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::connect_from_env()?;
    let response = client.getbalance(NO_PARAMS)?;

    println!("credit: {:?}", response.single("Credit"));

    Ok(())
}
