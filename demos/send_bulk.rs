use gosms::{BulkOptions, GoSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GoSmsClient::from_env()?;
    let recipients = std::env::var("GOSMS_TO")?;
    let sender = std::env::var("GOSMS_SENDER").unwrap_or_else(|_| "GOSMS".to_owned());

    let response = client
        .send_bulk(
            &sender,
            recipients.split(','),
            "hello from gosms",
            BulkOptions::default(),
        )
        .await?;

    println!(
        "success: {}, sent: {:?}, failed: {:?}",
        response.success, response.success_count, response.failed_count
    );
    for item in response.failed() {
        println!("failed: {:?} ({:?})", item.to, item.error);
    }

    Ok(())
}
