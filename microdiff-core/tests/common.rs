use microdiff_core::{Graph, MicrodiffError, NodeId};

// Initialize env_logger so RUST_LOG=debug shows engine traces. Only the first call has effect.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The expression chain from the micrograd sanity check, returns (graph, a, b, g).
#[allow(dead_code)]
pub fn build_reference_graph() -> Result<(Graph, NodeId, NodeId, NodeId), MicrodiffError> {
    let mut graph = Graph::new();
    let a = graph.value_labeled(-4.0, "a")?;
    let b = graph.value_labeled(2.0, "b")?;

    let mut c = graph.add(a, b)?;
    let ab = graph.mul(a, b)?;
    let b3 = graph.pow(b, 3)?;
    let mut d = graph.add(ab, b3)?;

    // c += c + 1
    let t = graph.add(c, 1.0)?;
    c = graph.add(c, t)?;
    // c += 1 + c + (-a)
    let t = graph.add(1.0, c)?;
    let neg_a = graph.neg(a)?;
    let t = graph.add(t, neg_a)?;
    c = graph.add(c, t)?;
    // d += d * 2 + (b + a).relu()
    let t = graph.mul(d, 2.0)?;
    let ba = graph.add(b, a)?;
    let r = graph.relu(ba)?;
    let t = graph.add(t, r)?;
    d = graph.add(d, t)?;
    // d += 3 * d + (b - a).relu()
    let t = graph.mul(3.0, d)?;
    let bma = graph.sub(b, a)?;
    let r = graph.relu(bma)?;
    let t = graph.add(t, r)?;
    d = graph.add(d, t)?;

    let e = graph.sub(c, d)?;
    let f = graph.pow(e, 2)?;
    let mut g = graph.div(f, 2.0)?;
    // g += 10.0 / f
    let t = graph.div(10.0, f)?;
    g = graph.add(g, t)?;
    graph.set_label(g, "g")?;

    Ok((graph, a, b, g))
}
