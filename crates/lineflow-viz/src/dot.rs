//! Traducción del workflow a un digraph Graphviz.
//!
//! Reglas de estilo:
//! - Nodo actual: caja rellena azul, fuente blanca.
//! - Nodo completo: caja rellena verde, fuente blanca.
//! - Nodo pendiente: caja sólida con fondo blanco.
//! - Arista resaltada en verde cuando el predecesor está completo.
//! - Un registro vacío produce el esqueleto de grafo vacío.

use std::fmt::Write;

use lineflow_core::Workflow;

const FILL_CURRENT: &str = "#2196F3";
const FILL_COMPLETE: &str = "#4CAF50";
const FILL_PENDING: &str = "#ffffff";
const EDGE_COMPLETE: &str = "#4CAF50";
const EDGE_PENDING: &str = "#9E9E9E";

const GRAPH_HEADER: &str = "digraph {\n\trankdir = \"LR\"\n\tnode [fontname=\"Arial\"]\n\tedge [fontname=\"Arial\"]\n";

/// Estatus visual de un step, proyección del API de lectura del motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Pending,
    Current,
    Complete,
}

/// Nodo del digraph, listo para serializar. Público para que otros sinks
/// puedan re-estilar la misma proyección.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotNodeSpec {
    pub name: String,
    pub display_name: String,
    pub tooltip: String,
    pub shape: String,
    pub style: String,
    pub fill_color: String,
}

/// Arista dirigida entre steps consecutivos de la secuencia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotEdgeSpec {
    pub from: String,
    pub to: String,
    pub tooltip: String,
    pub style: String,
    pub color: String,
}

/// Estatus de un step según el API de lectura del motor.
pub fn node_status(workflow: &Workflow, name: &str) -> NodeStatus {
    if workflow.is_step_current(name) {
        NodeStatus::Current
    } else if workflow.is_step_complete(name) {
        NodeStatus::Complete
    } else {
        NodeStatus::Pending
    }
}

/// Proyecta el workflow a especificaciones de nodos y aristas.
pub fn build_specs(workflow: &Workflow) -> (Vec<DotNodeSpec>, Vec<DotEdgeSpec>) {
    let steps = workflow.steps();
    let mut nodes = Vec::with_capacity(steps.len());
    let mut edges = Vec::with_capacity(steps.len().saturating_sub(1));

    for (i, step) in steps.iter().enumerate() {
        let (style, fill) = match node_status(workflow, step.name()) {
            NodeStatus::Current => ("filled", FILL_CURRENT),
            NodeStatus::Complete => ("filled", FILL_COMPLETE),
            NodeStatus::Pending => ("solid", FILL_PENDING),
        };
        nodes.push(DotNodeSpec { name: step.name().to_string(),
                                 display_name: step.title().to_string(),
                                 tooltip: step.description().to_string(),
                                 shape: "box".to_string(),
                                 style: style.to_string(),
                                 fill_color: fill.to_string() });

        if i > 0 {
            let prev = &steps[i - 1];
            let color = if workflow.is_step_complete(prev.name()) {
                EDGE_COMPLETE
            } else {
                EDGE_PENDING
            };
            edges.push(DotEdgeSpec { from: prev.name().to_string(),
                                     to: step.name().to_string(),
                                     tooltip: format!("From {} to {}", prev.title(), step.title()),
                                     style: "solid".to_string(),
                                     color: color.to_string() });
        }
    }

    (nodes, edges)
}

/// Render DOT del workflow completo. Un registro vacío devuelve el
/// esqueleto de grafo sin nodos ni aristas.
pub fn render(workflow: &Workflow) -> String {
    let (nodes, edges) = build_specs(workflow);

    let mut out = String::from(GRAPH_HEADER);
    for node in &nodes {
        let _ = write!(out,
                       "\t\"{}\" [label=\"{}\" shape={} style={} tooltip=\"{}\" fillcolor=\"{}\"",
                       escape(&node.name),
                       escape(&node.display_name),
                       node.shape,
                       node.style,
                       escape(&node.tooltip),
                       node.fill_color);
        if node.style == "filled" {
            out.push_str(" fontcolor=\"white\"");
        }
        out.push_str("]\n");
    }
    for edge in &edges {
        let _ = writeln!(out,
                         "\t\"{}\" -> \"{}\" [style={} tooltip=\"{}\" color=\"{}\"]",
                         escape(&edge.from),
                         escape(&edge.to),
                         edge.style,
                         escape(&edge.tooltip),
                         edge.color);
    }
    out.push('}');
    out
}

/// Escapa un literal de string DOT (backslashes y comillas).
fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
