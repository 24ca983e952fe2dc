#[tokio::main]
async fn main() -> anyhow::Result<()> {
    speakback_backend::run().await
}
