use std::io;

use clickatell::{ClickatellClient, Credentials};

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// Authenticate with credentials from `CLICKATELL_USER`, `CLICKATELL_PASSWORD` and `CLICKATELL_API_ID`.
pub fn connect_from_env() -> Result<ClickatellClient, Box<dyn std::error::Error>> {
    let credentials = Credentials::parse(
        required_env("CLICKATELL_USER")?,
        required_env("CLICKATELL_PASSWORD")?,
        required_env("CLICKATELL_API_ID")?,
    )?;

    let mut builder = ClickatellClient::builder(credentials);
    if let Ok(base_url) = std::env::var("CLICKATELL_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    Ok(builder.connect()?)
}
