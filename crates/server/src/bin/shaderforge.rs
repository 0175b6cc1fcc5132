use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shaderforge_server::main_entry().await
}
