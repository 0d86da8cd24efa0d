mod common;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::connect_from_env()?;
    let to = common::required_env("CLICKATELL_TO")?;
    let text = std::env::var("CLICKATELL_TEXT")
        .unwrap_or_else(|_| "Hello from the clickatell example.".to_owned());

    let response = client.sendmsg([("to", to), ("text", text)])?;
    for id in response.all("ID") {
        println!("message id: {id}");
    }

    Ok(())
}
