#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

//! Compares how the reference hash functions spread random words over the buckets
//! of a chaining map and plots the share of empty buckets per input size.
//!
//! ```text
//! RUST_LOG=info cargo run --bin hash_quality -- [output.png]
//! ```

use log::info;
use plotters::prelude::*;
use primehash::{Additive, ChainingMap, KeyHasher, Positional, StdHasher, TableError};
use rand::{Rng, distr::Alphanumeric};

const DEFAULT_OUTPUT: &str = "hash_quality.png";
const MAX_WORDS: usize = 20_000;
const STEPS: usize = 10;
const INITIAL_CAPACITY: usize = 11;
const WORD_LENGTHS: std::ops::RangeInclusive<usize> = 3..=12;

const METHODS: [&str; 3] = ["Additive", "Positional", "DefaultHasher"];

/// Outcome of filling one map
struct Sample {
    empty_fraction: f64,
    capacity: usize,
}

fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(WORD_LENGTHS);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn fill<H: KeyHasher<String>>(hasher: H, words: &[String]) -> Result<Sample, TableError> {
    let mut map = ChainingMap::new(INITIAL_CAPACITY, hasher);
    for word in words {
        map.put(word.clone(), ())?;
    }

    Ok(Sample {
        empty_fraction: map.empty_buckets() as f64 / map.get_capacity() as f64,
        capacity: map.get_capacity(),
    })
}

fn plot(path: &str, sizes: &[usize], results: &[Vec<f64>]) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = sizes.last().copied().unwrap_or(MAX_WORDS);
    let mut chart = ChartBuilder::on(&root)
        .caption("Empty Buckets per Hash Function (separate chaining)", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..max_x, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Fraction of Empty Buckets")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for ((method, values), color) in METHODS.iter().zip(results).zip(colors) {
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(sizes.iter().copied().zip(values.iter().copied()), line_style))?
            .label(*method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            sizes.iter().copied().zip(values.iter().copied()).map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    // Same words for every hasher so only the hash differs
    let mut rng = rand::rng();
    let words: Vec<String> = (0..MAX_WORDS).map(|_| random_word(&mut rng)).collect();
    let sizes: Vec<usize> = (1..=STEPS).map(|step| MAX_WORDS * step / STEPS).collect();

    let mut results: Vec<Vec<f64>> = vec![Vec::with_capacity(STEPS); METHODS.len()];
    for &size in &sizes {
        let sample = words.get(..size).unwrap_or(&words);
        let samples = [fill(Additive, sample)?, fill(Positional, sample)?, fill(StdHasher, sample)?];

        for ((method, result), series) in METHODS.iter().zip(&samples).zip(&mut results) {
            info!(
                "{size} keys, {method}: {:.1}% of {} buckets empty",
                result.empty_fraction * 100.0,
                result.capacity
            );
            series.push(result.empty_fraction);
        }
    }

    plot(&output, &sizes, &results)?;
    println!("Generated plot image: {output}");

    Ok(())
}
