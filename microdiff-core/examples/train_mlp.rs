//! # Training a tiny MLP
//!
//! Fits a 3-4-4-1 tanh network to four points with full-batch gradient descent.
//!
//! Run with `RUST_LOG=debug cargo run --example train_mlp` to see engine logs.

use log::info;
use microdiff_core::nn::{mse_loss, Activation, Init, Mlp, Module};
use microdiff_core::optim::Sgd;
use microdiff_core::{Graph, MicrodiffError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MicrodiffError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], Activation::Tanh, Init::default(), &mut rng)?;
    let params = mlp.parameters();
    // Everything after this mark is rebuilt each step.
    let mark = graph.len();
    let sgd = Sgd::new(0.05)?;

    for step in 0..200 {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            predictions.extend(mlp.forward_values(&mut graph, x)?);
        }
        let loss = mse_loss(&mut graph, &predictions, &ys)?;
        graph.backward(loss)?;
        graph.clip_gradients(loss, 10.0)?;
        let health = graph.check_gradient_health(loss)?;

        if step % 20 == 0 {
            info!(
                "step {:3}: loss = {:.6}, max |grad| = {:.4}",
                step,
                graph.data(loss)?,
                health.max_grad
            );
        }
        sgd.step(&mut graph, &params)?;
        graph.truncate(mark);
    }

    for (x, y) in xs.iter().zip(ys) {
        let out = mlp.forward_values(&mut graph, x)?;
        println!("{:?} -> {:+.4} (target {:+.1})", x, graph.data(out[0])?, y);
        graph.truncate(mark);
    }
    Ok(())
}
