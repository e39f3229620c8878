use on_the_line::Session;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session_with(problems: usize) -> (Session, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = Session::new();
    for _ in 0..problems {
        session.new_problem(&mut rng);
    }
    (session, rng)
}

#[test]
fn starts_with_no_problem() {
    let session = Session::new();
    assert!(session.is_empty());
    assert!(session.current().is_none());
    assert!(!session.is_revealed());
}

#[test]
fn new_problem_appends_and_moves_to_the_end() {
    let (mut session, mut rng) = session_with(1);
    assert_eq!(session.len(), 1);
    assert_eq!(session.current_index(), 0);

    session.reveal();
    session.new_problem(&mut rng);
    assert_eq!(session.len(), 2);
    assert_eq!(session.current_index(), 1);
    assert!(!session.is_revealed(), "new problem hides the answer");
}

#[test]
fn go_to_out_of_range_is_a_silent_no_op() {
    let (mut session, _) = session_with(3);
    session.go_to(1);
    session.reveal();

    session.go_to(3);
    assert_eq!(session.current_index(), 1);
    assert!(session.is_revealed(), "failed navigation changes nothing");

    session.go_to(usize::MAX);
    assert_eq!(session.current_index(), 1);
    assert!(session.is_revealed());
}

#[test]
fn previous_at_the_first_problem_is_ignored() {
    let (mut session, _) = session_with(2);
    session.go_to(0);
    session.previous();
    assert_eq!(session.current_index(), 0);
}

#[test]
fn next_at_the_end_generates_exactly_one_problem() {
    let (mut session, mut rng) = session_with(2);
    assert_eq!(session.current_index(), 1);

    session.next(&mut rng);
    assert_eq!(session.len(), 3);
    assert_eq!(session.current_index(), 2);
}

#[test]
fn next_before_the_end_only_advances() {
    let (mut session, mut rng) = session_with(3);
    let last = session.current().copied();
    session.go_to(0);

    session.next(&mut rng);
    assert_eq!(session.len(), 3, "visited slots are never regenerated");
    assert_eq!(session.current_index(), 1);

    session.go_to(2);
    assert_eq!(session.current(), last.as_ref());
}

#[test]
fn reveal_is_idempotent_and_cleared_by_navigation() {
    let (mut session, _) = session_with(2);
    assert!(!session.is_revealed());

    session.reveal();
    assert!(session.is_revealed());
    session.reveal();
    assert!(session.is_revealed(), "second reveal changes nothing");

    session.go_to(0);
    assert!(!session.is_revealed());
}

#[test]
fn reveal_without_a_problem_is_ignored() {
    let mut session = Session::new();
    session.reveal();
    assert!(!session.is_revealed());
}
