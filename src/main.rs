#[tokio::main]
async fn main() {
    recipes_api::start_server().await;
}
