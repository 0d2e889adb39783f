use gosms::GoSmsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GoSmsClient::from_env()?;

    match client.balance().await {
        Ok(response) => println!("balance: {}", response.balance),
        Err(err) => match err.api_error() {
            Some(api) => println!("gateway refused: {} (code {})", api.message, api.error_code),
            None => return Err(err.into()),
        },
    }

    Ok(())
}
