#[tokio::main]
async fn main() {
    session_auth::run().await;
}
