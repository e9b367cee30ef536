/// hematite-ml viewer
///
/// A browser-based companion for the two demo pipelines: regenerate labeled
/// blobs and watch the MLE/MAP Gaussian estimates move, then train the toy
/// digit network and inspect its activation clouds in 3-D.
/// Served by a synchronous tiny_http server; no JavaScript frameworks.
///
/// Run with:
///   cargo run --bin viewer --release
/// Then open http://127.0.0.1:7878

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::sync::{Arc, Mutex};
use tiny_http::Server;

use state::ViewerState;

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("Failed to bind HTTP server");

    let shared_state = Arc::new(Mutex::new(ViewerState::new()));

    println!("╔══════════════════════════════════════════════╗");
    println!("║          hematite-ml viewer                  ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{}                 ║", addr);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Sections: Blobs & estimation >              ║");
    println!("║            Digit trainer > Activations       ║");
    println!("╚══════════════════════════════════════════════╝");

    // Each request is dispatched on its own thread so long renders (density
    // plots) do not stall form submissions and status polls.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
