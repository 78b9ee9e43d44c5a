#[tokio::main]
async fn main() -> anyhow::Result<()> {
    answer_grader_backend::run().await
}
