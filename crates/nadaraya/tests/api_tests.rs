//! Tests for the public kernel regression API.
//!
//! These tests exercise the estimator only through the prelude:
//! - Builder configuration and construction failures
//! - Evaluation order, cardinality and determinism
//! - The qualitative bandwidth trade-off (locality vs smoothness)
//! - Undefined predictions far away from the data
//!
//! ## Test Organization
//!
//! 1. **Construction** - Builder, direct constructor, error reporting
//! 2. **Reference Scenarios** - Small hand-checkable datasets
//! 3. **Properties** - Order, duplicates, constant data, locality, smoothing
//! 4. **Undefined Predictions** - Zero kernel mass handling
//! 5. **Concurrency** - Shared evaluation across threads

use approx::{assert_abs_diff_eq, assert_relative_eq};

use nadaraya::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Monthly mean temperature (x) and sales (y) over two years.
fn temperature_sales() -> (Vec<f64>, Vec<f64>) {
    let x = vec![
        7.6, 6.0, 9.4, 14.5, 19.8, 22.5, 27.7, 28.3, 25.6, 18.8, 13.3, 8.8, 4.9, 6.6, 9.8, 15.7,
        19.5, 23.1, 28.5, 26.4, 23.2, 18.7, 13.1, 8.4,
    ];
    let y = vec![
        172.0, 144.0, 190.0, 202.0, 197.0, 276.0, 292.0, 220.0, 214.0, 172.0, 202.0, 240.0, 152.0,
        117.0, 176.0, 182.0, 181.0, 251.0, 249.0, 214.0, 167.0, 159.0, 185.0, 228.0,
    ];
    (x, y)
}

fn variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

fn defined(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().map(|v| v.expect("prediction should be defined")).collect()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the builder produces an estimator with the configured bandwidth.
#[test]
fn test_builder_basic() {
    let (x, y) = temperature_sales();
    let model = NadarayaWatson::new().bandwidth(2.0).build(&x, &y).unwrap();

    assert_eq!(model.bandwidth(), 2.0);
    assert_eq!(model.training_points(), 24);
    assert_eq!(model.x(), x.as_slice());
    assert_eq!(model.y(), y.as_slice());
}

/// Test the builder requires a bandwidth.
#[test]
fn test_builder_missing_bandwidth() {
    let res = NadarayaWatson::<f64>::new().build(&[1.0, 2.0], &[1.0, 2.0]);

    assert_eq!(
        res.unwrap_err(),
        InvalidParameterError::MissingParameter {
            parameter: "bandwidth"
        }
    );
}

/// Test the builder rejects parameters set twice.
#[test]
fn test_builder_duplicate_parameter() {
    let res = NadarayaWatson::new()
        .bandwidth(1.0)
        .bandwidth(2.0)
        .build(&[1.0, 2.0], &[1.0, 2.0]);

    assert!(matches!(
        res,
        Err(InvalidParameterError::DuplicateParameter {
            parameter: "bandwidth"
        })
    ));

    let res = NadarayaWatson::new()
        .bandwidth(1.0)
        .return_diagnostics()
        .return_diagnostics()
        .build(&[1.0, 2.0], &[1.0, 2.0]);

    assert!(matches!(
        res,
        Err(InvalidParameterError::DuplicateParameter {
            parameter: "return_diagnostics"
        })
    ));
}

/// Test construction fails for zero, negative, NaN and infinite bandwidths.
#[test]
fn test_invalid_bandwidths() {
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 3.0];

    for h in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let res = KernelRegression::new(&x, &y, h);
        match res {
            Err(InvalidParameterError::InvalidBandwidth(got)) => {
                assert!(got.is_nan() || got == h, "Reported bandwidth should match input");
            }
            other => panic!("Expected InvalidBandwidth for h={h}, got {other:?}"),
        }
    }
}

/// Test construction fails for empty and mismatched training data.
#[test]
fn test_invalid_training_data() {
    let empty: [f64; 0] = [];
    assert_eq!(
        KernelRegression::new(&empty, &empty, 1.0).unwrap_err(),
        InvalidParameterError::EmptyInput
    );

    assert_eq!(
        KernelRegression::new(&[1.0, 2.0], &[1.0], 1.0).unwrap_err(),
        InvalidParameterError::MismatchedInputs { x_len: 2, y_len: 1 }
    );

    let err = KernelRegression::new(&[1.0, f64::NAN], &[1.0, 2.0], 1.0).unwrap_err();
    assert!(matches!(err, InvalidParameterError::InvalidNumericValue { .. }));
    assert_eq!(err.parameter(), "x");

    let err = KernelRegression::new(&[1.0, 2.0], &[f64::INFINITY, 2.0], 1.0).unwrap_err();
    assert_eq!(err.parameter(), "y");
}

/// Test error messages name the parameter and the constraint.
#[test]
fn test_error_messages() {
    let err = KernelRegression::new(&[1.0], &[1.0], -1.0).unwrap_err();
    let msg = err.to_string();

    assert_eq!(err.parameter(), "bandwidth");
    assert!(msg.contains("bandwidth"), "Message should name the parameter: {msg}");
    assert!(msg.contains("-1"), "Message should include the value: {msg}");
    assert!(msg.contains("> 0"), "Message should state the constraint: {msg}");
}

/// Test errors are usable as `std::error::Error` trait objects.
#[test]
fn test_error_trait_object() {
    fn build() -> Result<KernelRegression<f64>, Box<dyn std::error::Error>> {
        Ok(KernelRegression::new(&[], &[], 1.0)?)
    }

    assert!(build().is_err());
}

/// Test replacing the bandwidth builds an equivalent new estimator.
#[test]
fn test_with_bandwidth() {
    let (x, y) = temperature_sales();
    let narrow = KernelRegression::new(&x, &y, 0.5).unwrap();
    let wide = narrow.with_bandwidth(5.0).unwrap();
    let direct = KernelRegression::new(&x, &y, 5.0).unwrap();

    let query = linspace(0.0, 30.0, 31);
    assert_eq!(wide.evaluate(&query), direct.evaluate(&query));
    assert_eq!(narrow.bandwidth(), 0.5);
    assert!(narrow.with_bandwidth(0.0).is_err());
}

// ============================================================================
// Reference Scenario Tests
// ============================================================================

/// Test two symmetric training points with h = 1.
#[test]
fn test_two_point_scenario() {
    let model = KernelRegression::new(&[0.0, 10.0], &[0.0, 10.0], 1.0).unwrap();
    let pred = defined(&model.evaluate(&[0.0, 5.0, 10.0]));

    assert_abs_diff_eq!(pred[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(pred[1], 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(pred[2], 10.0, epsilon = 1e-12);
    assert!(pred[0] < pred[1] && pred[1] < pred[2]);
}

/// Test a single training point predicts its response wherever its weight is non-zero.
#[test]
fn test_single_point_scenario() {
    for h in [0.1, 1.0, 7.5, 1e6] {
        let model = KernelRegression::new(&[5.0], &[42.0], h).unwrap();
        let query = [5.0, 5.0 - h, 5.0 + 3.0 * h, 5.0 + 20.0 * h, 5.0 - 30.0 * h];

        for pred in model.evaluate(&query) {
            assert_eq!(pred, Some(42.0), "Single point should give 42 for h={h}");
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test output length and order match the query sequence.
#[test]
fn test_output_cardinality_and_order() {
    let (x, y) = temperature_sales();
    let model = KernelRegression::new(&x, &y, 2.0).unwrap();

    let query = [30.0, 5.0, 17.5, -3.0, 12.0];
    let batch = model.evaluate(&query);

    assert_eq!(batch.len(), query.len());
    for (i, &q) in query.iter().enumerate() {
        assert_eq!(batch[i], model.evaluate_at(q), "Order mismatch at {i}");
    }

    assert!(model.evaluate(&[]).is_empty());
}

/// Test duplicate query points produce identical predictions.
#[test]
fn test_duplicate_queries() {
    let (x, y) = temperature_sales();
    let model = KernelRegression::new(&x, &y, 1.3).unwrap();
    let pred = model.evaluate(&[12.0, 20.0, 12.0, 12.0]);

    assert_eq!(pred[0], pred[2]);
    assert_eq!(pred[0], pred[3]);
}

/// Test repeated evaluations are bit-for-bit identical.
#[test]
fn test_deterministic() {
    let (x, y) = temperature_sales();
    let model = KernelRegression::new(&x, &y, 2.0).unwrap();
    let query = linspace(4.9, 28.5, 200);

    let first: Vec<u64> = defined(&model.evaluate(&query))
        .iter()
        .map(|v| v.to_bits())
        .collect();
    let second: Vec<u64> = defined(&model.evaluate(&query))
        .iter()
        .map(|v| v.to_bits())
        .collect();

    assert_eq!(first, second);
}

/// Test constant responses are reproduced exactly for any bandwidth.
#[test]
fn test_constant_response() {
    let x = [3.0, -1.5, 8.25, 8.25, 0.1, 100.0];
    let y = [7.3; 6];

    for h in [0.01, 0.5, 3.0, 1e3] {
        let model = KernelRegression::new(&x, &y, h).unwrap();
        let query = linspace(-5.0, 105.0, 111);

        for pred in model.evaluate(&query).into_iter().flatten() {
            assert_eq!(pred, 7.3, "Constant data should be reproduced for h={h}");
        }
    }
}

/// Test smaller bandwidths track a coincident training point more closely.
#[test]
fn test_locality() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 10.0, 0.0, 10.0, 0.0];

    let error_at = |h: f64| {
        let model = KernelRegression::new(&x, &y, h).unwrap();
        (model.evaluate_at(1.0).unwrap() - 10.0).abs()
    };

    let wide = error_at(2.0);
    let medium = error_at(0.5);
    let narrow = error_at(0.1);

    assert!(narrow < medium, "h=0.1 error {narrow} should be < h=0.5 error {medium}");
    assert!(medium < wide, "h=0.5 error {medium} should be < h=2 error {wide}");
    assert!(narrow < 1e-15);
}

/// Test the curve flattens as the bandwidth grows and approaches the mean of y.
#[test]
fn test_bandwidth_smoothing() {
    let (x, y) = temperature_sales();
    let grid = linspace(4.9, 28.5, 200);

    let curve_variance = |h: f64| {
        let model = KernelRegression::new(&x, &y, h).unwrap();
        variance(&defined(&model.evaluate(&grid)))
    };

    let v_small = curve_variance(0.5);
    let v_medium = curve_variance(2.0);
    let v_large = curve_variance(8.0);
    let v_huge = curve_variance(1e6);

    assert!(v_small > v_medium, "{v_small} should exceed {v_medium}");
    assert!(v_medium > v_large, "{v_medium} should exceed {v_large}");
    assert!(v_large > v_huge, "{v_large} should exceed {v_huge}");

    let mean_y = y.iter().sum::<f64>() / y.len() as f64;
    let model = KernelRegression::new(&x, &y, 1e6).unwrap();
    for pred in defined(&model.evaluate(&grid)) {
        assert_relative_eq!(pred, mean_y, max_relative = 1e-6);
    }
}

/// Test unsorted and repeated training x-values are accepted.
#[test]
fn test_unsorted_training_data() {
    let x = [3.0, 1.0, 2.0, 1.0];
    let y = [30.0, 10.0, 20.0, 12.0];
    let model = KernelRegression::new(&x, &y, 0.05).unwrap();

    assert_relative_eq!(model.evaluate_at(1.0).unwrap(), 11.0, epsilon = 1e-9);
    assert_relative_eq!(model.evaluate_at(3.0).unwrap(), 30.0, epsilon = 1e-9);
}

/// Test f32 precision is supported.
#[test]
fn test_f32_support() {
    let model = KernelRegression::new(&[0.0f32, 10.0], &[0.0f32, 10.0], 1.0f32).unwrap();
    let pred = model.evaluate_at(5.0f32).unwrap();

    assert_relative_eq!(pred, 5.0f32, epsilon = 1e-5);
}

// ============================================================================
// Undefined Prediction Tests
// ============================================================================

/// Test points far outside the data with a small bandwidth are undefined.
#[test]
fn test_undefined_far_from_data() {
    let model = KernelRegression::new(&[0.0, 1.0], &[3.0, 5.0], 0.02).unwrap();
    let pred = model.evaluate(&[-100.0, 0.0, 0.5, 1.0, 100.0]);

    assert_eq!(pred[0], None);
    assert_eq!(pred[1], Some(3.0));
    assert_relative_eq!(pred[2].unwrap(), 4.0, epsilon = 1e-12);
    assert_eq!(pred[3], Some(5.0));
    assert_eq!(pred[4], None);
}

/// Test non-finite query points yield undefined predictions rather than errors.
#[test]
fn test_non_finite_queries() {
    let model = KernelRegression::new(&[0.0, 1.0], &[3.0, 5.0], 1.0).unwrap();
    let pred = model.evaluate(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.5]);

    assert_eq!(pred[0], None);
    assert_eq!(pred[1], None);
    assert_eq!(pred[2], None);
    assert_relative_eq!(pred[3].unwrap(), 4.0, epsilon = 1e-12);
}

/// Test undefined points only appear near the grid extremities for small h.
#[test]
fn test_undefined_on_wide_grid() {
    let (x, y) = temperature_sales();
    let model = KernelRegression::new(&x, &y, 0.1).unwrap();
    let result = model.predict(&linspace(-100.0, 130.0, 231));

    assert!(result.has_undefined());
    assert_eq!(result.y.len(), 231);

    // Inside the training range every point is defined.
    for (xq, pred) in result.x.iter().zip(result.y.iter()) {
        if (4.9..=28.5).contains(xq) {
            assert!(pred.is_some(), "Expected defined prediction at {xq}");
        }
    }
    assert_eq!(result.y[0], None);
    assert_eq!(result.y[230], None);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Test one estimator can be evaluated from several threads at once.
#[test]
fn test_concurrent_evaluation() {
    let (x, y) = temperature_sales();
    let model = KernelRegression::new(&x, &y, 2.0).unwrap();
    let grid = linspace(0.0, 30.0, 300);
    let expected = model.evaluate(&grid);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| model.evaluate(&grid)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
