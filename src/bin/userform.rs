use anyhow::Result;
use userform::cli::{actions, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    actions::submit::handle(action, &globals).await?;

    Ok(())
}
