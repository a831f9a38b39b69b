//! Recomputación posicional del completado al mover el cursor, en ambas
//! direcciones.

use lineflow_core::{Step, Workflow, WorkflowError};

fn workflow(names: &[&str]) -> Workflow {
    let mut builder = Workflow::builder();
    for name in names {
        builder = builder.step(Step::new(*name));
    }
    builder.build().expect("nombres únicos")
}

#[test]
fn forward_jump_completes_earlier_steps_positionally() {
    let mut wf = workflow(&["a", "b", "c", "d"]);

    wf.set_current_step("d").unwrap();

    // a fue estampado al abandonarlo; b y c sólo por posición
    assert!(wf.is_step_complete("a"));
    assert!(wf.is_step_complete("b"));
    assert!(wf.is_step_complete("c"));
    assert!(!wf.is_step_complete("d"));

    assert!(wf.state().step_details["a"].completed.is_some());
    assert!(wf.state().step_details["b"].completed.is_none());
    assert!(wf.state().step_details["c"].completed.is_none());

    let p = wf.progress();
    assert_eq!((p.completed, p.pending, p.current), (3, 1, Some(3)));
}

#[test]
fn backward_move_uncompletes_unmarked_steps() {
    let mut wf = workflow(&["a", "b", "c", "d"]);
    wf.set_current_step("d").unwrap();

    // Al retroceder, d queda estampado por el abandono
    wf.set_current_step("b").unwrap();

    assert!(wf.is_step_complete("a")); // posición y marca
    assert!(!wf.is_step_complete("b")); // actual, sin marca
    assert!(!wf.is_step_complete("c")); // perdió el completado posicional
    assert!(wf.is_step_complete("d")); // marca explícita del abandono

    let p = wf.progress();
    assert_eq!((p.completed, p.current), (2, Some(1)));
}

#[test]
fn explicit_mark_survives_backward_move() {
    let mut wf = workflow(&["a", "b", "c"]);
    wf.set_current_step("c").unwrap();
    assert!(wf.mark_step_completed("b"));

    wf.set_current_step("a").unwrap();

    // b conserva su marca explícita aunque quedó después del cursor
    assert!(wf.is_step_complete("b"));
    assert!(wf.is_step_complete("c")); // estampado al abandonar c
}

#[test]
fn mark_ahead_of_cursor_does_not_move_it() {
    let mut wf = workflow(&["a", "b", "c"]);

    assert!(wf.mark_step_completed("c"));
    assert!(wf.is_step_complete("c"));
    assert!(wf.is_step_current("a"));
    assert_eq!(wf.progress().current, Some(0));
}

#[test]
fn reentering_current_step_restarts_it() {
    let mut wf = workflow(&["a", "b"]);
    wf.set_current_step("b").unwrap();

    wf.set_current_step("b").unwrap();

    // El historial anota la re-entrada y el step sigue sin marca de
    // completado; el abandono no aplica sobre sí mismo
    assert_eq!(wf.history(), ["a", "b", "b"]);
    let detail = &wf.state().step_details["b"];
    assert!(detail.started.is_some());
    assert!(detail.completed.is_none());
    assert!(wf.is_step_current("b"));
}

#[test]
fn unknown_names_fail_mutators_and_miss_queries() {
    let mut wf = workflow(&["a", "b"]);
    wf.set_current_step("b").unwrap();

    let err = wf.set_current_step("ghost").unwrap_err();
    assert_eq!(err, WorkflowError::StepNotFound("ghost".to_string()));
    // El fallo no movió el cursor ni tocó el historial
    assert!(wf.is_step_current("b"));
    assert_eq!(wf.history(), ["a", "b"]);

    // Un nombre desconocido nunca se considera completo, aunque su ordinal
    // inexistente quede "antes" del cursor
    assert!(!wf.is_step_complete("ghost"));
    assert!(!wf.mark_step_completed("ghost"));
}
