//! # Determinism Tests
//!
//! Two engines with the same seed must agree bit for bit across every
//! method, for any interleaving of calls.

use vellum_random::{RandomEngine, RandomError, Seed, Vec2};

/// Every observable output of one mixed call sequence.
#[derive(Debug, PartialEq)]
enum Draw {
    Uniform(f64),
    Int(i32),
    Point(Vec2),
    Gaussian(f64),
    Noise(f64),
    Shuffle(Vec<u32>),
    Poisson(Vec<Vec2>),
}

fn run_sequence(seed: i32) -> Vec<Draw> {
    let mut rng = RandomEngine::new(Seed::new(seed));
    let mut out = Vec::new();

    for step in 0..40 {
        let t = f64::from(step) * 0.37;
        out.push(Draw::Uniform(rng.uniform()));
        out.push(Draw::Int(rng.int_value(100)));
        out.push(Draw::Point(rng.on_circle(7.5)));
        out.push(Draw::Point(rng.inside_circle(3.0)));
        out.push(Draw::Gaussian(rng.gaussian(5.0, 2.0)));
        out.push(Draw::Noise(rng.noise("1d", &[t]).unwrap()));
        out.push(Draw::Noise(rng.noise("3d", &[t, -t, 0.5]).unwrap()));
        out.push(Draw::Noise(rng.noise("4d", &[t, 1.0, -t, 2.0]).unwrap()));
        if step % 10 == 0 {
            out.push(Draw::Shuffle(rng.shuffle(&[1, 2, 3, 4, 5, 6, 7, 8])));
            out.push(Draw::Poisson(rng.poisson(40.0, 30.0, 6.0).unwrap()));
        }
    }
    out
}

#[test]
fn test_same_seed_same_sequence() {
    for seed in [0, 1, 42, 1000, -12345, i32::MAX, i32::MIN] {
        assert_eq!(run_sequence(seed), run_sequence(seed), "seed {seed} diverged");
    }
}

#[test]
fn test_different_seeds_diverge() {
    assert_ne!(run_sequence(1000), run_sequence(1001));
}

#[test]
fn test_golden_regression_fixture() {
    let mut rng = RandomEngine::new(Seed::new(1000));
    let first_three = [rng.uniform(), rng.uniform(), rng.uniform()];
    assert_eq!(
        first_three,
        [0.825979950837791, 0.568123568315059, 0.9587893472053111]
    );
}

#[test]
fn test_noise_does_not_advance_stream() {
    let mut quiet = RandomEngine::new(Seed::new(9));
    let mut noisy = RandomEngine::new(Seed::new(9));

    for i in 0..100 {
        let _ = noisy.noise("2d", &[f64::from(i), 0.25]).unwrap();
        let _ = noisy.noise("7d", &[1.0]);
    }

    assert_eq!(noisy.draw_count(), 0);
    assert_eq!(quiet.uniform(), noisy.uniform());
}

#[test]
fn test_failed_noise_leaves_engine_untouched() {
    let mut a = RandomEngine::new(Seed::new(31));
    let mut b = RandomEngine::new(Seed::new(31));

    let _ = a.gaussian(0.0, 1.0);
    let _ = b.gaussian(0.0, 1.0);
    assert_eq!(
        b.noise("5d", &[1.0]),
        Err(RandomError::UnsupportedDimension("5d".to_string()))
    );

    // The pending deviate survives the failed call
    assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
    assert_eq!(a.uniform(), b.uniform());
}

#[test]
fn test_one_d_noise_is_two_d_on_axis() {
    let rng = RandomEngine::new(Seed::new(2024));
    for i in 0..200 {
        let x = f64::from(i) * 0.05 - 3.0;
        assert_eq!(rng.noise("1d", &[x]).unwrap(), rng.noise("2d", &[x, 0.0]).unwrap());
    }
}

#[test]
fn test_poisson_follows_call_history() {
    // Drawing first shifts the stream, so the point set changes
    let mut fresh = RandomEngine::new(Seed::new(5));
    let mut used = RandomEngine::new(Seed::new(5));
    let _ = used.uniform();

    let a = fresh.poisson(50.0, 50.0, 5.0).unwrap();
    let b = used.poisson(50.0, 50.0, 5.0).unwrap();
    assert_ne!(a, b);

    let mut replay = RandomEngine::new(Seed::new(5));
    assert_eq!(a, replay.poisson(50.0, 50.0, 5.0).unwrap());
}

#[test]
fn test_parallel_engines_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|variant| {
            std::thread::spawn(move || {
                let mut rng = RandomEngine::new(Seed::new(variant));
                (0..1000).map(|_| rng.uniform()).collect::<Vec<f64>>()
            })
        })
        .collect();

    let streams: Vec<Vec<f64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (variant, stream) in streams.iter().enumerate() {
        let mut rng = RandomEngine::new(Seed::new(variant as i32));
        let expected: Vec<f64> = (0..1000).map(|_| rng.uniform()).collect();
        assert_eq!(stream, &expected);
    }
}
