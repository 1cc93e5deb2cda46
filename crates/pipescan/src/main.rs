use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pipescan_lib::main().await
}
