use microdiff_core::utils::testing::{check_all_grads_zero, check_data_near, check_grad_near};
use microdiff_core::{MicrodiffError, Op};

mod common;
use common::{build_reference_graph, init_logger};

#[test]
fn test_reference_expression_values_and_gradients() -> Result<(), MicrodiffError> {
    init_logger();
    let (mut graph, a, b, g) = build_reference_graph()?;
    check_data_near(&graph, g, 24.7041, 1e-3);

    graph.backward(g)?;
    check_grad_near(&graph, a, 138.8338, 1e-3);
    check_grad_near(&graph, b, 645.5773, 1e-3);
    Ok(())
}

#[test]
fn test_reference_expression_reset_then_rerun() -> Result<(), MicrodiffError> {
    init_logger();
    let (mut graph, a, b, g) = build_reference_graph()?;
    graph.backward(g)?;
    graph.reset_grad(g)?;
    check_all_grads_zero(&graph, g);

    graph.backward(g)?;
    check_grad_near(&graph, a, 138.8338, 1e-3);
    check_grad_near(&graph, b, 645.5773, 1e-3);
    Ok(())
}

#[test]
fn test_reference_expression_structure() -> Result<(), MicrodiffError> {
    let (graph, a, _, g) = build_reference_graph()?;
    assert_eq!(graph.op(g)?, Op::Add);
    assert_eq!(graph.label(g)?, Some("g"));
    assert_eq!(graph.label(a)?, Some("a"));
    let order = graph.topological_order(g)?;
    assert_eq!(*order.last().unwrap(), g);
    assert!(order.contains(&a));
    Ok(())
}
