use std::io::{self, BufRead, Write};

use gosms::GoSmsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GoSmsClient::from_env()?;
    let phone = std::env::var("GOSMS_TO")?;

    let sent = client.send_otp(&phone).await?;
    println!("OTP sent to {phone}, hash: {}", sent.hash);

    print!("code: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let verified = client.verify_otp(&phone, &sent.hash, code.trim()).await?;
    if verified.verify {
        println!("verified");
    } else {
        println!("wrong or expired code");
    }

    Ok(())
}
