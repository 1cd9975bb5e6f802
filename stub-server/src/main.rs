fn main() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    let _g = rt.enter();
    rt.block_on(run_server());
}

async fn run_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();
    println!(
        "stub api listening on http://{}",
        listener.local_addr().unwrap()
    );
    stub_server::serve(listener).await.unwrap()
}
