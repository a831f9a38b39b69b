use lineflow_core::{Step, StepReference, Workflow, WorkflowError};
use serde_json::json;

#[test]
fn integration_smoke_builder_and_accessors() {
    let wf = Workflow::builder().step(Step::new("draft").with_title("Draft")
                                                        .with_description("Prepare the initial document"))
                                .step(Step::new("review").with_title("Review")
                                                         .with_kind("approval")
                                                         .with_responsible("editors"))
                                .build()
                                .expect("builder sin duplicados");

    assert_eq!(wf.steps().len(), 2);
    assert_eq!(wf.current_step_name(), Some("draft"));

    let review = wf.get_step("review").expect("review registrado");
    assert_eq!(review.kind(), "approval");
    assert_eq!(review.responsible(), "editors");
    // Los defaults del constructor se conservan si no se pisan
    let draft = wf.get_step("draft").unwrap();
    assert_eq!(draft.kind(), "normal");
    assert_eq!(draft.responsible(), "Admin");

    // El primer step quedó iniciado por la transición automática
    let detail = wf.state().step_details.get("draft").expect("detalle creado al registrar");
    assert!(detail.started.is_some());
    assert!(detail.completed.is_none());
    assert_eq!(wf.history(), ["draft"]);
}

#[test]
fn integration_smoke_builder_rejects_duplicates() {
    let err = Workflow::builder().step(Step::new("a"))
                                 .step(Step::new("a"))
                                 .build()
                                 .unwrap_err();
    assert_eq!(err, WorkflowError::DuplicateStep("a".to_string()));
}

#[test]
fn integration_smoke_meta_roundtrip() {
    let mut wf = Workflow::builder().step(Step::new("draft"))
                                    .step(Step::new("review"))
                                    .build()
                                    .unwrap();

    wf.set_step_meta("review", "user", json!("john")).expect("step registrado");
    wf.set_step_meta("review", "attempt", json!(2)).expect("step registrado");

    assert_eq!(wf.step_meta("review", "user"), Some(&json!("john")));
    assert_eq!(wf.step_meta("review", "attempt"), Some(&json!(2)));
    // Clave o step desconocidos: miss de consulta
    assert_eq!(wf.step_meta("review", "missing"), None);
    assert_eq!(wf.step_meta("ghost", "user"), None);

    // Escritura sobre referencia mala: fallo explícito
    let err = wf.set_step_meta("ghost", "user", json!("x")).unwrap_err();
    assert_eq!(err, WorkflowError::StepNotFound("ghost".to_string()));
}

#[test]
fn integration_smoke_handle_references() {
    let draft = Step::new("draft");
    let review = Step::new("review");
    let draft_handle = StepReference::from(&draft);
    let review_handle = StepReference::from(&review);

    let mut wf = Workflow::new();
    wf.add_step(draft).unwrap();
    wf.add_step(review).unwrap();

    assert!(wf.is_step_current(draft_handle.clone()));
    wf.set_current_step(review_handle).expect("handle registrado");
    assert!(wf.is_step_current("review"));
    assert!(wf.is_step_complete(draft_handle));

    // Handle nunca registrado: miss en consultas, error en mutadores
    let ghost = Step::new("ghost");
    let ghost_handle = StepReference::from(&ghost);
    assert!(!wf.is_step_current(ghost_handle.clone()));
    assert!(!wf.is_step_complete(ghost_handle.clone()));
    assert!(!wf.mark_step_completed(ghost_handle.clone()));
    assert!(matches!(wf.set_current_step(ghost_handle), Err(WorkflowError::StepNotFound(_))));
}
