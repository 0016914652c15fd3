#[tokio::main]
async fn main() {
    if let Err(err) = loan_screen_api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
