#[tokio::main]
async fn main() -> anyhow::Result<()> {
    steno_marker_backend::run().await
}
