use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod http;
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure is fatal: log it and exit non-zero.
    let listener = match create_reusable_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_error(&format!("Failed to bind {addr}: {e}"));
            return Err(e.into());
        }
    };

    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&addr);

    run_server_loop(listener, state).await
}

/// Accept loop: each connection is served independently on a spawned task.
async fn run_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single HTTP/1 connection in a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<config::AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Binding through socket2 lets the server restart promptly on a port still
/// in TIME_WAIT, and sets non-blocking mode for the tokio runtime.
fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
