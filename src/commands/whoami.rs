use anyhow::Result;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::member_line;

pub async fn run(client: &ApiClient) -> Result<()> {
    let spinner = create_spinner("Fetching profile");
    let myself = client.myself().await;
    spinner.finish_and_clear();
    let myself = myself?;

    println!("{}", member_line(&myself));

    Ok(())
}
