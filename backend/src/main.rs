use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("KumiFont - 日本語フォント組み合わせプレビュー")
        .index_by_robots(false)
}

// The studio has no protocol of its own; the backend only serves the app.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}
