//! Auto-Close Host Wiring
//!
//! The machine never sleeps; it hands the host a token and a delay, and
//! the host fires the token back when the deadline passes. This demo
//! wires that up with a tokio sleep, using a short delay so the run
//! finishes quickly.
//!
//! Run with: cargo run --example auto_close

use ovel_waitlist::{FormValues, ModalState, NullSink, Source, WaitlistMachine};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Auto-Close Host Wiring ===\n");

    let mut machine =
        WaitlistMachine::new(NullSink).with_auto_close_delay(Duration::from_millis(300));

    machine.open_modal(Source::NavGetStarted);
    machine.submit(FormValues::new("sarah@techflow.io", "dev", "1-10"));

    let pending = machine.pending_auto_close().expect("timer armed");
    println!("confirmation up; auto-close in {:?}", pending.delay);

    tokio::time::sleep(pending.delay).await;
    machine.auto_close(pending.token);

    assert_eq!(machine.modal_state(), ModalState::Closed);
    println!("modal dismissed itself; flow back at rest");

    // A stale token from a finished flow is a no-op.
    machine.open_modal(Source::HeroCta);
    machine.auto_close(pending.token);
    assert_eq!(machine.modal_state(), ModalState::Open);
    println!("stale token ignored; fresh modal untouched");
}
