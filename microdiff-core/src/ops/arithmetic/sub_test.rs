use super::*;

#[test]
fn test_sub_forward_and_backward() -> Result<()> {
    let mut graph = Graph::new();
    let a = graph.value(5.0)?;
    let b = graph.value(2.0)?;
    let c = sub_op(&mut graph, a, b)?;
    assert_eq!(graph.data(c)?, 3.0);
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, -1.0);
    Ok(())
}

#[test]
fn test_sub_self_cancels() -> Result<()> {
    let mut graph = Graph::new();
    let a = graph.value(5.0)?;
    let c = sub_op(&mut graph, a, a)?;
    assert_eq!(graph.data(c)?, 0.0);
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}
