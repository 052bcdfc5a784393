//! Property-based tests for the interaction flow.
//!
//! These tests use proptest to verify the flow's guarantees hold across
//! many randomly generated inputs and action sequences.

use ovel_waitlist::{
    AnalyticsSink, CloseReason, FormValues, InteractionState, ModalState, Properties, SinkError,
    Source, SubmissionState, WaitlistMachine,
};
use proptest::prelude::*;

/// Records every port call in order.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<SinkCall>,
}

#[derive(Clone, PartialEq, Debug)]
enum SinkCall {
    Capture {
        event: String,
        properties: Properties,
    },
    Identify {
        subject: String,
        traits: Properties,
    },
}

impl AnalyticsSink for RecordingSink {
    fn capture(&mut self, event: &str, properties: &Properties) -> Result<(), SinkError> {
        self.calls.push(SinkCall::Capture {
            event: event.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }

    fn identify(&mut self, subject: &str, traits: &Properties) -> Result<(), SinkError> {
        self.calls.push(SinkCall::Identify {
            subject: subject.to_string(),
            traits: traits.clone(),
        });
        Ok(())
    }
}

fn machine() -> WaitlistMachine<RecordingSink> {
    WaitlistMachine::new(RecordingSink::default())
}

fn capture_count(machine: &WaitlistMachine<RecordingSink>, event: &str) -> usize {
    machine
        .sink()
        .calls
        .iter()
        .filter(|call| matches!(call, SinkCall::Capture { event: name, .. } if name == event))
        .count()
}

#[derive(Clone, Debug)]
enum Action {
    Open(Source),
    Close(CloseReason),
    Submit(FormValues),
    FireTimer,
}

prop_compose! {
    fn arbitrary_source()(variant in 0..6u8) -> Source {
        Source::ALL[variant as usize]
    }
}

prop_compose! {
    fn arbitrary_role()(variant in 0..5u8) -> &'static str {
        ["eng_manager", "scrum_master", "cto", "pm", "dev"][variant as usize]
    }
}

prop_compose! {
    fn arbitrary_team_size()(variant in 0..4u8) -> &'static str {
        ["1-10", "11-50", "51-200", "200+"][variant as usize]
    }
}

prop_compose! {
    fn complete_form()(
        email in "[a-z]{1,8}@[a-z]{1,8}\\.(io|com|dev)",
        role in arbitrary_role(),
        team_size in arbitrary_team_size(),
    ) -> FormValues {
        FormValues::new(email, role, team_size)
    }
}

prop_compose! {
    fn incomplete_form()(
        form in complete_form(),
        blank in 0..3u8,
    ) -> FormValues {
        let mut form = form;
        match blank {
            0 => form.email.clear(),
            1 => form.role.clear(),
            _ => form.team_size.clear(),
        }
        form
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arbitrary_source().prop_map(Action::Open),
        prop_oneof![Just(CloseReason::Button), Just(CloseReason::Backdrop)].prop_map(Action::Close),
        complete_form().prop_map(Action::Submit),
        incomplete_form().prop_map(Action::Submit),
        Just(Action::FireTimer),
    ]
}

fn drive(machine: &mut WaitlistMachine<RecordingSink>, action: Action) {
    match action {
        Action::Open(source) => machine.open_modal(source),
        Action::Close(reason) => machine.close_modal_with(reason),
        Action::Submit(form) => machine.submit(form),
        Action::FireTimer => {
            if let Some(pending) = machine.pending_auto_close() {
                machine.auto_close(pending.token);
            }
        }
    }
}

proptest! {
    #[test]
    fn open_from_closed_emits_one_tagged_event(source in arbitrary_source()) {
        let mut machine = machine();
        machine.open_modal(source);

        prop_assert_eq!(machine.modal_state(), ModalState::Open);
        prop_assert_eq!(machine.sink().calls.len(), 1);

        let mut properties = Properties::new();
        properties.insert("source".to_string(), source.as_str().to_string());
        prop_assert_eq!(
            &machine.sink().calls[0],
            &SinkCall::Capture {
                event: "open_waitlist_modal".to_string(),
                properties,
            }
        );
    }

    #[test]
    fn close_always_yields_closed_and_idle(
        source in arbitrary_source(),
        form in complete_form(),
        submit_first in any::<bool>(),
        reason_is_backdrop in any::<bool>(),
    ) {
        let mut machine = machine();
        machine.open_modal(source);
        if submit_first {
            machine.submit(form);
        }

        let reason = if reason_is_backdrop {
            CloseReason::Backdrop
        } else {
            CloseReason::Button
        };
        machine.close_modal_with(reason);

        prop_assert_eq!(machine.modal_state(), ModalState::Closed);
        prop_assert_eq!(machine.submission_state(), SubmissionState::Idle);
        prop_assert!(machine.pending_auto_close().is_none());
    }

    #[test]
    fn incomplete_submit_changes_nothing(
        source in arbitrary_source(),
        form in incomplete_form(),
    ) {
        let mut machine = machine();
        machine.open_modal(source);
        let calls_before = machine.sink().calls.len();

        machine.submit(form);

        prop_assert_eq!(machine.state(), &InteractionState::OpenIdle);
        prop_assert_eq!(machine.sink().calls.len(), calls_before);
        prop_assert!(machine.pending_auto_close().is_none());
    }

    #[test]
    fn complete_submit_emits_signup_and_identify_once(
        source in arbitrary_source(),
        form in complete_form(),
    ) {
        let mut machine = machine();
        machine.open_modal(source);
        machine.submit(form.clone());

        prop_assert_eq!(machine.submission_state(), SubmissionState::Submitted);
        prop_assert_eq!(machine.sink().calls.len(), 3);

        let mut properties = Properties::new();
        properties.insert("email".to_string(), form.email.clone());
        properties.insert("role".to_string(), form.role.clone());
        properties.insert("teamSize".to_string(), form.team_size.clone());
        prop_assert_eq!(
            &machine.sink().calls[1],
            &SinkCall::Capture {
                event: "waitlist_signup".to_string(),
                properties,
            }
        );

        let mut traits = Properties::new();
        traits.insert("role".to_string(), form.role.clone());
        traits.insert("teamSize".to_string(), form.team_size.clone());
        traits.insert("source".to_string(), "landing_page".to_string());
        prop_assert_eq!(
            &machine.sink().calls[2],
            &SinkCall::Identify {
                subject: form.email.clone(),
                traits,
            }
        );
    }

    #[test]
    fn repeated_submits_emit_exactly_one_signup(
        source in arbitrary_source(),
        form in complete_form(),
        extra_submits in 1..4usize,
    ) {
        let mut machine = machine();
        machine.open_modal(source);
        for _ in 0..=extra_submits {
            machine.submit(form.clone());
        }

        prop_assert_eq!(capture_count(&machine, "waitlist_signup"), 1);
    }

    #[test]
    fn history_is_continuous_for_any_action_sequence(
        actions in prop::collection::vec(arbitrary_action(), 0..25)
    ) {
        let mut machine = machine();
        for action in actions {
            drive(&mut machine, action);
        }

        let records = machine.history().transitions();
        for pair in records.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        if let Some(last) = records.last() {
            prop_assert_eq!(&last.to, machine.state());
        }
    }

    #[test]
    fn open_captures_match_modal_opens(
        actions in prop::collection::vec(arbitrary_action(), 0..25)
    ) {
        let mut machine = machine();
        for action in actions {
            drive(&mut machine, action);
        }

        let opens = machine
            .history()
            .transitions()
            .iter()
            .filter(|record| record.to == InteractionState::OpenIdle)
            .count();
        prop_assert_eq!(capture_count(&machine, "open_waitlist_modal"), opens);
    }

    #[test]
    fn signup_captures_match_submissions(
        actions in prop::collection::vec(arbitrary_action(), 0..25)
    ) {
        let mut machine = machine();
        for action in actions {
            drive(&mut machine, action);
        }

        let submissions = machine
            .history()
            .transitions()
            .iter()
            .filter(|record| record.trigger == "submit")
            .count();
        prop_assert_eq!(capture_count(&machine, "waitlist_signup"), submissions);
    }
}
