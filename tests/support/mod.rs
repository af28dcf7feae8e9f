// Test harness: one card form service per test binary, shared by every test in it.
use std::{
    net::TcpStream,
    sync::{OnceLock, mpsc},
    time::Duration,
};

use card_form::interface_adapters::state::AppState;

// Card the shared service reports as already registered.
pub const REGISTERED_CARD: &str = "5500000000000004";

// How long a freshly spawned service may take before it must accept connections.
const STARTUP_ATTEMPTS: u32 = 100;
const STARTUP_POLL: Duration = Duration::from_millis(20);

// Base URL of the shared service, set on first use.
static BASE_URL: OnceLock<String> = OnceLock::new();

// Returns the base URL of the shared service, starting it on first call.
pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(|| {
        let base_url = spawn_server(AppState::with_cards([REGISTERED_CARD]));
        wait_until_accepting(&base_url);
        base_url
    })
}

// Address nothing listens on; the listener is dropped before returning.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind spare port");
    let addr = listener.local_addr().expect("read spare addr");
    drop(listener);
    format!("http://{addr}")
}

// Runs the service on its own OS thread and runtime, so it outlives the
// per-test runtimes created by `#[tokio::test]`. Returns once the port is known.
fn spawn_server(state: AppState) -> String {
    let (addr_tx, addr_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("server runtime");
        runtime.block_on(async move {
            // Port 0 lets the OS pick a free port.
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral port");
            let addr = listener.local_addr().expect("read bound addr");
            addr_tx.send(addr).expect("publish bound addr");

            card_form::run(listener, state).await.expect("card form service failed");
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("service did not report its address");
    format!("http://{addr}")
}

// Blocks until a TCP connect succeeds, failing the test run if it never does.
fn wait_until_accepting(base_url: &str) {
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..STARTUP_ATTEMPTS {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(STARTUP_POLL);
    }

    panic!("card form service at {base_url} never accepted connections");
}
