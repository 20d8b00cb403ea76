//! End-to-end dispatch scenarios for sender-scoped and global events.

use std::rc::Rc;
use uiev_event::testing::{CallLog, RecordingDiagnostics};
use uiev_event::{Event, EventOptions, HandlerId, SenderId};

/// Argument of a "clicked" notification.
#[derive(Debug, Clone, PartialEq)]
struct Click {
    x: i32,
    y: i32,
}

fn clicked() -> (Event<Click, &'static str>, Rc<RecordingDiagnostics>) {
    let diag = Rc::new(RecordingDiagnostics::new());
    let event = Event::with_diagnostics(&EventOptions::sender_scoped(), diag.clone())
        .expect("current options are valid");
    (event, diag)
}

fn record_label(
    log: &CallLog<&'static str>,
) -> impl Fn(Option<&SenderId>, &Click, &&'static str) + 'static {
    let log = log.clone();
    move |_, _, label| log.record(*label)
}

// =============================================================================
// Sender scoping
// =============================================================================

mod sender_scoping {
    use super::*;

    #[test]
    fn one_event_serves_many_buttons() {
        let (event, diag) = clicked();
        let (ok, cancel, help) = (SenderId::new(), SenderId::new(), SenderId::new());
        let log = CallLog::new();

        event
            .add_handler(record_label(&log), Some(ok), "A")
            .expect("add succeeds");
        event
            .add_handler(record_label(&log), Some(cancel), "B")
            .expect("add succeeds");

        event.fire(Some(&ok), &Click { x: 1, y: 1 }).expect("fire ok");
        assert_eq!(log.take(), vec!["A"]);

        event
            .fire(Some(&cancel), &Click { x: 2, y: 2 })
            .expect("fire ok");
        assert_eq!(log.take(), vec!["B"]);

        let delivered = event
            .fire(Some(&help), &Click { x: 3, y: 3 })
            .expect("fire ok");
        assert_eq!(delivered, 0);
        assert!(log.is_empty());
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn several_handlers_on_one_sender_run_in_id_order() {
        let (event, _) = clicked();
        let button = SenderId::new();
        let other = SenderId::new();
        let log = CallLog::new();

        event
            .add_handler(record_label(&log), Some(button), "first")
            .expect("add succeeds");
        event
            .add_handler(record_label(&log), Some(other), "elsewhere")
            .expect("add succeeds");
        event
            .add_handler(record_label(&log), Some(button), "second")
            .expect("add succeeds");

        event
            .fire(Some(&button), &Click { x: 0, y: 0 })
            .expect("fire ok");
        assert_eq!(log.entries(), vec!["first", "second"]);
    }

    #[test]
    fn args_reach_callbacks_unmodified() {
        let (event, _) = clicked();
        let button = SenderId::new();
        let log: CallLog<(Click, &'static str)> = CallLog::new();
        let l = log.clone();
        event
            .add_handler(
                move |_, click, label| l.record((click.clone(), *label)),
                Some(button),
                "data",
            )
            .expect("add succeeds");

        let click = Click { x: 120, y: -4 };
        event.fire(Some(&button), &click).expect("fire ok");
        assert_eq!(log.entries(), vec![(click, "data")]);
    }
}

// =============================================================================
// Global events
// =============================================================================

mod global_events {
    use super::*;

    #[test]
    fn global_event_delivers_to_all() {
        let diag = Rc::new(RecordingDiagnostics::new());
        let quit: Event<(), u8, ()> =
            Event::with_diagnostics(&EventOptions::global(), diag.clone()).expect("valid");
        let log = CallLog::new();
        for n in 1..=3u8 {
            let l = log.clone();
            quit.add_handler(move |_, _, n| l.record(*n), None, n)
                .expect("add succeeds");
        }

        assert_eq!(quit.fire(None, &()), Ok(3));
        assert_eq!(log.entries(), vec![1, 2, 3]);
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn global_event_rejects_sender_on_fire() {
        let diag = Rc::new(RecordingDiagnostics::new());
        let quit: Event<()> =
            Event::with_diagnostics(&EventOptions::global(), diag.clone()).expect("valid");
        assert!(quit.fire(Some(&SenderId::new()), &()).is_err());
        assert_eq!(diag.codes(), vec!["EVENT_BAD_SENDER"]);
    }
}

// =============================================================================
// Blocking
// =============================================================================

mod blocking {
    use super::*;

    #[test]
    fn block_round_trip_restores_dispatch() {
        let (event, _) = clicked();
        let button = SenderId::new();
        let log = CallLog::new();
        let ids: Vec<HandlerId> = ["a", "b", "c"]
            .into_iter()
            .map(|label| {
                event
                    .add_handler(record_label(&log), Some(button), label)
                    .expect("add succeeds")
            })
            .collect();
        let click = Click { x: 0, y: 0 };

        event.fire(Some(&button), &click).expect("fire ok");
        let before = log.take();

        event.set_handler_blocked(ids[1], true).expect("block ok");
        event.fire(Some(&button), &click).expect("fire ok");
        assert_eq!(log.take(), vec!["a", "c"]);

        event.set_handler_blocked(ids[1], false).expect("unblock ok");
        event.fire(Some(&button), &click).expect("fire ok");
        assert_eq!(log.take(), before);
    }

    #[test]
    fn blocking_twice_is_idempotent() {
        let (event, diag) = clicked();
        let button = SenderId::new();
        let log = CallLog::new();
        let id = event
            .add_handler(record_label(&log), Some(button), "a")
            .expect("add succeeds");

        event.set_handler_blocked(id, true).expect("block ok");
        event.set_handler_blocked(id, true).expect("block ok");
        assert_eq!(event.is_handler_blocked(id), Ok(true));
        assert_eq!(event.fire(Some(&button), &Click { x: 0, y: 0 }), Ok(0));
        assert_eq!(diag.count(), 0);
    }
}

// =============================================================================
// Unknown ids
// =============================================================================

mod unknown_ids {
    use super::*;

    #[test]
    fn operations_on_missing_id_change_nothing() {
        let (event, diag) = clicked();
        let button = SenderId::new();
        let log = CallLog::new();
        let id = event
            .add_handler(record_label(&log), Some(button), "a")
            .expect("add succeeds");
        let missing = HandlerId::new(id.get() + 10).expect("non-zero");

        assert!(event.delete_handler(missing).is_err());
        assert!(event.is_handler_blocked(missing).is_err());
        assert!(event.set_handler_blocked(missing, true).is_err());

        assert_eq!(event.handler_ids(), vec![id]);
        assert_eq!(event.spare_ids(), 0);
        assert_eq!(
            diag.codes(),
            vec!["EVENT_HANDLER_NOT_FOUND"; 3]
        );

        event
            .fire(Some(&button), &Click { x: 0, y: 0 })
            .expect("fire ok");
        assert_eq!(log.entries(), vec!["a"]);
    }
}
