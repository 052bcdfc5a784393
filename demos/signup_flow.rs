//! Waitlist Signup Flow
//!
//! This demo walks the whole interaction: opening the modal from
//! different call-to-actions, a blocked incomplete submission, a
//! complete signup with its analytics trail, and the reset on close.
//!
//! Run with: cargo run --example signup_flow

use ovel_waitlist::{
    AnalyticsSink, FormValues, ModalState, Properties, SinkError, Source, SubmissionState,
    WaitlistMachine,
};

/// Prints and remembers every call the flow sends to the collector.
#[derive(Default)]
struct EchoSink {
    captures: usize,
    identifies: usize,
}

impl AnalyticsSink for EchoSink {
    fn capture(&mut self, event: &str, properties: &Properties) -> Result<(), SinkError> {
        self.captures += 1;
        println!("  [capture] {event} {properties:?}");
        Ok(())
    }

    fn identify(&mut self, subject: &str, traits: &Properties) -> Result<(), SinkError> {
        self.identifies += 1;
        println!("  [identify] {subject} {traits:?}");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Waitlist Signup Flow ===\n");

    let mut machine = WaitlistMachine::new(EchoSink::default());

    println!("Step 1: Visitor clicks the hero call-to-action");
    machine.open_modal(Source::HeroCta);
    assert_eq!(machine.modal_state(), ModalState::Open);
    println!("  modal is open, form idle\n");

    println!("Step 2: Submit with no team size selected (blocked)");
    machine.submit(FormValues::new("sarah@techflow.io", "eng_manager", ""));
    assert_eq!(machine.submission_state(), SubmissionState::Idle);
    println!("  nothing happened - the form's own validation owns this case\n");

    println!("Step 3: Submit the complete form");
    machine.update_email("sarah@techflow.io");
    machine.submit(FormValues::new("sarah@techflow.io", "eng_manager", "11-50"));
    assert_eq!(machine.submission_state(), SubmissionState::Submitted);
    let confirmation_email = machine.submitted_draft().unwrap().email.clone();
    println!("  confirmation shown for {confirmation_email}");
    println!(
        "  auto-close pending: {:?}\n",
        machine.pending_auto_close().unwrap().delay
    );

    println!("Step 4: Visitor dismisses the confirmation early");
    machine.close_modal();
    assert_eq!(machine.modal_state(), ModalState::Closed);
    assert_eq!(machine.submission_state(), SubmissionState::Idle);
    assert!(machine.pending_auto_close().is_none());
    println!("  closed, submission flag reset, timer disarmed\n");

    println!("Step 5: Reopen from a pricing tier");
    machine.open_modal(Source::PricingPro);
    assert_eq!(machine.submission_state(), SubmissionState::Idle);
    assert_eq!(machine.email_entry(), "sarah@techflow.io");
    println!("  fresh idle form; typed email still there\n");

    println!("Collector saw {} captures and {} identify call(s)",
        machine.sink().captures,
        machine.sink().identifies
    );

    println!("\nStates traversed:");
    for state in machine.history().get_path() {
        println!("  -> {}", state.name());
    }
}
