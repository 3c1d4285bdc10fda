use blueprint::{
    JobPhase, RawBlueprintInput, RenderOptions, RenderSession, ValidationOutcome, ViewportState,
};

const MARKUP: &str = r#"<svg><path d="M 0 0 L 100 0 L 100 50 L 0 50 Z"/></svg>"#;

#[test]
fn starts_with_no_data() {
    let session = RenderSession::new(RenderOptions::default());
    assert_eq!(session.outcome().code(), "no-data");
}

#[test]
fn unchanged_input_is_memoized_away() {
    let mut session = RenderSession::new(RenderOptions::default());
    assert!(session.set_input(RawBlueprintInput::Text(MARKUP.into())));
    assert_eq!(session.outcome().code(), "valid");
    // Same identity: no recomputation.
    assert!(!session.set_input(RawBlueprintInput::Text(MARKUP.into())));
    // New identity: pipeline reruns.
    assert!(session.set_input(RawBlueprintInput::Absent));
    assert_eq!(session.outcome().code(), "no-data");
}

#[test]
fn phase_changes_do_not_touch_the_geometry() {
    let mut session = RenderSession::new(RenderOptions::default());
    session.set_input(RawBlueprintInput::Text(MARKUP.into()));
    let before = match session.outcome() {
        ValidationOutcome::Valid(g) => g.clone(),
        other => panic!("unexpected outcome {other:?}"),
    };
    session.set_phase(JobPhase::Processing);
    assert_eq!(session.phase(), JobPhase::Processing);
    match session.outcome() {
        ValidationOutcome::Valid(g) => assert_eq!(*g, before),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn render_reflects_phase_and_outcome() {
    let mut session = RenderSession::new(RenderOptions::default());
    session.set_input(RawBlueprintInput::Text(MARKUP.into()));
    session.set_phase(JobPhase::Processing);
    let vp = ViewportState::new();
    assert!(session.render(&vp).contains("Processing blueprint"));
    session.set_phase(JobPhase::Complete);
    assert!(session.render(&vp).contains("url(#bp-grid)"));
}
