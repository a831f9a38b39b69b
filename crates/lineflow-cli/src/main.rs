use lineflow_core::{Step, Workflow, WorkflowError};
use serde_json::json;

fn main() {
    // Cargar .env si existe para obtener LINEFLOW_STATE_PATH
    let _ = dotenvy::dotenv();

    // CLI mínima: `lineflow-cli [--out <archivo>]`
    let args: Vec<String> = std::env::args().collect();
    let mut out_path: Option<String> = std::env::var("LINEFLOW_STATE_PATH").ok();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                if i < args.len() { out_path = Some(args[i].clone()); }
            }
            "--help" | "-h" => {
                println!("uso: lineflow-cli [--out <archivo>]");
                println!("Recorre un workflow de ejemplo y muestra progreso, grafo DOT y snapshot.");
                println!("El snapshot se escribe en --out o en $LINEFLOW_STATE_PATH si están definidos.");
                return;
            }
            other => {
                eprintln!("[lineflow] argumento desconocido: {other}");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    if let Err(e) = run_demo(out_path.as_deref()) {
        eprintln!("[lineflow] error: {e}");
        std::process::exit(1);
    }
}

fn run_demo(out_path: Option<&str>) -> Result<(), WorkflowError> {
    let mut wf = Workflow::builder()
        .step(Step::new("draft").with_title("Draft")
                                .with_description("Prepare the initial document"))
        .step(Step::new("review").with_title("Review")
                                 .with_kind("approval")
                                 .with_responsible("editors")
                                 .with_description("Review and approve the document"))
        .step(Step::new("publish").with_title("Publish")
                                  .with_kind("notification")
                                  .with_description("Publish the approved document"))
        .build()?;

    println!("step actual: {}", wf.current_step_name().unwrap_or("<ninguno>"));

    // Avanzar el cursor y anotar metadatos del step activo
    wf.set_current_step("review")?;
    wf.set_step_meta("review", "user", json!("john"))?;
    println!("draft completo: {}", wf.is_step_complete("draft"));
    println!("meta de review/user: {:?}", wf.step_meta("review", "user"));

    wf.mark_step_completed("review");

    let progress = wf.progress();
    println!("progreso: {}/{} steps completos ({:.2}%)",
             progress.completed, progress.total, progress.percent);
    println!("historial: {:?}", wf.history());

    println!("grafo DOT:");
    println!("{}", lineflow_viz::render(&wf));

    let payload = wf.snapshot()?;
    println!("estado serializado: {payload}");
    if let Some(path) = out_path {
        if let Err(e) = std::fs::write(path, &payload) {
            eprintln!("[lineflow] no se pudo escribir {path}: {e}");
            std::process::exit(3);
        }
        println!("snapshot escrito en {path}");
    }

    // Restaurar en un motor nuevo: el estado viaja, las definiciones no
    let mut restored = Workflow::new();
    restored.restore(&payload)?;
    println!("restaurado: step actual por nombre = {:?}", restored.current_step_name());
    println!("restaurado: definición del actual disponible = {}",
             restored.current_step().is_some());

    Ok(())
}
